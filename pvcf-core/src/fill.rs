use indexmap::IndexMap;

use crate::consts::REFERENCE_INDEX;
use crate::models::{Item, VariantKey};

///
/// Give every item a genotype for each of `sample_ids`.
///
/// Samples an item has never seen are homozygous reference. Genotypes
/// shorter than `ploidy` are padded with reference calls; longer ones are
/// left alone.
///
pub fn fill_samples<'a, I>(items: &mut IndexMap<VariantKey, Item>, sample_ids: I, ploidy: usize)
where
    I: IntoIterator<Item = &'a String> + Clone,
{
    for item in items.values_mut() {
        fill_item(item, sample_ids.clone(), ploidy);
    }
}

pub fn fill_item<'a, I>(item: &mut Item, sample_ids: I, ploidy: usize)
where
    I: IntoIterator<Item = &'a String>,
{
    for sample_id in sample_ids {
        if !item.samples.contains_key(sample_id) {
            item.samples.insert(sample_id.clone(), vec![REFERENCE_INDEX; ploidy]);
        }
    }

    for genotype in item.samples.values_mut() {
        if genotype.len() < ploidy {
            genotype.resize(ploidy, REFERENCE_INDEX);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn item() -> Item {
        let mut item = Item::new(&VariantKey {
            pos: "10".to_string(),
            ref_allele: "C".to_string(),
        });
        item.allele_index("G");
        item.add_genotype("sample1", 1, 2);
        item.add_genotype("sample2", 1, 1);
        item
    }

    fn ids(ids: &[&str]) -> IndexSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[rstest]
    fn test_pads_and_defaults_to_reference(mut item: Item) {
        fill_item(&mut item, &ids(&["sample1", "sample2", "sample3"]), 2);

        assert_eq!(item.samples["sample1"], vec![1, 1]);
        assert_eq!(item.samples["sample2"], vec![1, 0]);
        assert_eq!(item.samples["sample3"], vec![0, 0]);
    }

    #[rstest]
    fn test_longer_genotypes_are_not_truncated(mut item: Item) {
        item.add_genotype("sample1", 1, 1);
        fill_item(&mut item, &ids(&[]), 2);

        assert_eq!(item.samples["sample1"], vec![1, 1, 1]);
    }

    #[rstest]
    #[case(1, vec![1], vec![0])]
    #[case(4, vec![1, 0, 0, 0], vec![0, 0, 0, 0])]
    fn test_ploidy_is_configurable(
        mut item: Item,
        #[case] ploidy: usize,
        #[case] sample2: Vec<usize>,
        #[case] absent: Vec<usize>,
    ) {
        fill_item(&mut item, &ids(&["absent"]), ploidy);

        assert_eq!(item.samples["sample2"], sample2);
        assert_eq!(item.samples["absent"], absent);
    }

    #[rstest]
    fn test_fill_all_items(item: Item) {
        let mut items = IndexMap::new();
        let other = Item::new(&VariantKey {
            pos: "11".to_string(),
            ref_allele: "D".to_string(),
        });
        items.insert(
            VariantKey {
                pos: item.pos.clone(),
                ref_allele: item.ref_allele.clone(),
            },
            item,
        );
        items.insert(
            VariantKey {
                pos: other.pos.clone(),
                ref_allele: other.ref_allele.clone(),
            },
            other,
        );

        let sample_ids = ids(&["sample1", "sample2"]);
        fill_samples(&mut items, &sample_ids, 2);

        for item in items.values() {
            assert_eq!(item.samples.len(), 2);
            assert!(item.samples.values().all(|g| g.len() == 2));
        }
        assert_eq!(items[1].samples["sample1"], vec![0, 0]);
    }
}
