use std::fmt::{self, Display};

use crate::consts::*;
use crate::errors::{PvcfError, Result};
use crate::models::Item;

/// One column of the output table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Column {
    Prot,
    Pos,
    Ref,
    Alt,
    Info,
    Sample(String),
}

impl Column {
    /// Fixed column names map to their field; anything else is a sample.
    pub fn from_name(name: &str) -> Self {
        match name {
            PROT_COLUMN => Column::Prot,
            POS_COLUMN => Column::Pos,
            REF_COLUMN => Column::Ref,
            ALT_COLUMN => Column::Alt,
            INFO_COLUMN => Column::Info,
            sample => Column::Sample(sample.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Column::Prot => PROT_COLUMN,
            Column::Pos => POS_COLUMN,
            Column::Ref => REF_COLUMN,
            Column::Alt => ALT_COLUMN,
            Column::Info => INFO_COLUMN,
            Column::Sample(sample) => sample,
        }
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

///
/// Ordered output columns: the fixed columns followed by one column per
/// sample.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    columns: Vec<Column>,
}

impl Header {
    pub fn new<I, S>(sample_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns = FIXED_COLUMNS
            .iter()
            .map(|name| Column::from_name(name))
            .chain(
                sample_ids
                    .into_iter()
                    .map(|id| Column::from_name(id.as_ref())),
            )
            .collect();

        Header { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn sample_ids(&self) -> impl Iterator<Item = &String> {
        self.columns.iter().filter_map(|column| match column {
            Column::Sample(sample) => Some(sample),
            _ => None,
        })
    }

    pub fn contains_sample(&self, sample_id: &str) -> bool {
        self.sample_ids().any(|sample| sample == sample_id)
    }

    /// The header row itself, one cell per column.
    pub fn names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name().to_string()).collect()
    }
}

///
/// Render one item into cells, in header order.
///
/// Every sample column of the header must already have a genotype in the
/// item; run the sample filler first.
///
pub fn render_row(item: &Item, header: &Header) -> Result<Vec<String>> {
    header
        .columns()
        .iter()
        .map(|column| render_cell(item, column))
        .collect()
}

fn render_cell(item: &Item, column: &Column) -> Result<String> {
    let cell = match column {
        Column::Prot => item.prot.clone(),
        Column::Pos => item.pos.clone(),
        Column::Ref => item.ref_allele.clone(),
        Column::Alt => item.alt.join(ALT_SEPARATOR),
        Column::Info => item.info.clone(),
        Column::Sample(sample_id) => {
            let genotype = item
                .samples
                .get(sample_id)
                .ok_or_else(|| PvcfError::MissingSample(sample_id.clone()))?;
            genotype
                .iter()
                .map(|idx| idx.to_string())
                .collect::<Vec<_>>()
                .join(SAMPLE_SEPARATOR)
        }
    };

    Ok(cell)
}
