use indexmap::IndexMap;

use crate::models::{Haplotype, Item, VariantKey};

///
/// Merge the diffs of all haplotypes into one `Item` per (pos, ref).
///
/// Haplotypes and their diffs are consumed in order: the first time an
/// alternate allele shows up at a key fixes its genotype index, so the
/// result depends on input order. Each sample gets that index once per
/// copy of the haplotype it carries.
///
pub fn aggregate(haplotypes: &[Haplotype]) -> IndexMap<VariantKey, Item> {
    let mut items: IndexMap<VariantKey, Item> = IndexMap::new();

    for haplotype in haplotypes {
        let prot = haplotype.protein_id();

        for diff in &haplotype.diffs {
            let key = diff.key();
            let item = items.entry(key).or_insert_with_key(Item::new);

            item.prot = prot.to_string();
            if item.info.is_empty() {
                item.info = diff.info.clone();
            }

            let alt_index = item.allele_index(&diff.alt);
            for (sample_id, &copies) in &haplotype.samples {
                item.add_genotype(sample_id, alt_index, copies);
            }
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::models::Diff;

    fn diff(pos: &str, ref_allele: &str, alt: &str, info: &str) -> Diff {
        Diff {
            pos: pos.to_string(),
            ref_allele: ref_allele.to_string(),
            alt: alt.to_string(),
            info: info.to_string(),
        }
    }

    fn haplotype(name: &str, samples: &[(&str, u32)], diffs: Vec<Diff>) -> Haplotype {
        Haplotype {
            frequency: 0.5,
            samples: samples
                .iter()
                .map(|(id, copies)| (id.to_string(), *copies))
                .collect(),
            aligned_sequences: vec![],
            diffs,
            name: name.to_string(),
        }
    }

    fn key(pos: &str, ref_allele: &str) -> VariantKey {
        VariantKey {
            pos: pos.to_string(),
            ref_allele: ref_allele.to_string(),
        }
    }

    #[rstest]
    fn test_shared_allele_collapses_into_one_row() {
        let haplotypes = vec![
            haplotype("P1:a", &[("sample1", 2)], vec![diff("10", "C", "G", "")]),
            haplotype("P1:b", &[("sample2", 1)], vec![diff("10", "C", "G", "")]),
        ];
        let items = aggregate(&haplotypes);

        assert_eq!(items.len(), 1);
        let item = &items[&key("10", "C")];
        assert_eq!(item.alt, vec!["G".to_string()]);
        assert_eq!(item.samples["sample1"], vec![1, 1]);
        assert_eq!(item.samples["sample2"], vec![1]);
    }

    #[rstest]
    fn test_alleles_indexed_in_first_seen_order() {
        let haplotypes = vec![
            haplotype("P1:a", &[("s1", 1)], vec![diff("4", "A", "T", "")]),
            haplotype("P1:b", &[("s2", 1)], vec![diff("4", "A", "V", "")]),
            haplotype("P1:c", &[("s1", 1), ("s3", 1)], vec![diff("4", "A", "T", "")]),
        ];
        let items = aggregate(&haplotypes);
        let item = &items[&key("4", "A")];

        assert_eq!(item.alt, vec!["T".to_string(), "V".to_string()]);
        assert_eq!(item.samples["s1"], vec![1, 1]);
        assert_eq!(item.samples["s2"], vec![2]);
        assert_eq!(item.samples["s3"], vec![1]);
    }

    #[rstest]
    fn test_reappearing_allele_points_at_its_first_position() {
        let haplotypes = vec![
            haplotype("P:a", &[("s1", 1)], vec![diff("4", "A", "T", "")]),
            haplotype("P:b", &[("s2", 1)], vec![diff("4", "A", "V", "")]),
            haplotype("P:c", &[("s3", 1)], vec![diff("4", "A", "T", "")]),
        ];
        let items = aggregate(&haplotypes);
        let item = &items[&key("4", "A")];

        assert_eq!(item.alt, vec!["T".to_string(), "V".to_string()]);
        assert_eq!(item.samples["s1"], vec![1]);
        assert_eq!(item.samples["s2"], vec![2]);
        // T is still the first allele, not the current list length
        assert_eq!(item.samples["s3"], vec![1]);
    }

    #[rstest]
    fn test_rows_kept_in_first_occurrence_order() {
        let haplotypes = vec![
            haplotype(
                "P1:a",
                &[("s1", 1)],
                vec![diff("20", "K", "R", ""), diff("3", "T", "S", "")],
            ),
            haplotype(
                "P1:b",
                &[("s1", 1)],
                vec![diff("1", "M", "V", ""), diff("20", "K", "E", "")],
            ),
        ];
        let items = aggregate(&haplotypes);
        let keys: Vec<String> = items.keys().map(|k| k.to_string()).collect();

        assert_eq!(keys, vec!["20:K", "3:T", "1:M"]);
    }

    #[rstest]
    fn test_same_pos_different_ref_are_distinct_rows() {
        let haplotypes = vec![haplotype(
            "P1:a",
            &[("s1", 1)],
            vec![diff("7", "A", "G", ""), diff("7", "AB", "G", "")],
        )];
        assert_eq!(aggregate(&haplotypes).len(), 2);
    }

    #[rstest]
    fn test_first_non_empty_info_wins_and_last_prot_wins() {
        let haplotypes = vec![
            haplotype("P1:a", &[("s1", 1)], vec![diff("5", "Y", "F", "")]),
            haplotype("P2:b", &[("s1", 1)], vec![diff("5", "Y", "<DEL>", "SVTYPE=DEL;END=6")]),
            haplotype("P3:c", &[("s1", 1)], vec![diff("5", "Y", "<DEL>", "SVTYPE=DEL;END=9")]),
        ];
        let items = aggregate(&haplotypes);
        let item = &items[&key("5", "Y")];

        assert_eq!(item.info, "SVTYPE=DEL;END=6");
        assert_eq!(item.prot, "P3");
        assert_eq!(item.samples["s1"], vec![1, 2, 2]);
    }

    #[rstest]
    fn test_zero_copy_samples_contribute_nothing() {
        let haplotypes = vec![haplotype(
            "P1:a",
            &[("s1", 0), ("s2", 1)],
            vec![diff("2", "K", "R", "")],
        )];
        let items = aggregate(&haplotypes);
        let item = &items[&key("2", "K")];

        assert!(!item.samples.contains_key("s1"));
        assert_eq!(item.samples["s2"], vec![1]);
    }

    #[rstest]
    fn test_haplotypes_without_diffs_produce_no_rows() {
        let haplotypes = vec![haplotype("P1:ref", &[("s1", 2)], vec![])];
        assert!(aggregate(&haplotypes).is_empty());
        assert!(aggregate(&[]).is_empty());
    }
}
