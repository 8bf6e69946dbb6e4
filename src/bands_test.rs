#[cfg(test)]
mod tests {
    use crate::bands::{BandIndex, BandSet, MAX_BAND_WINDOW};
    use crate::error::{ExcitonError, ValidationError};

    #[test]
    fn test_labels_partition_around_fermi_level() {
        let bands = BandSet::from_labels(&[-1, 1, 2], 5).unwrap();
        assert_eq!(bands.valence(), &[4]);
        assert_eq!(bands.conduction(), &[6, 7]);
        assert_eq!(bands.labels(), &[-1, 1, 2]);
        assert_eq!(bands.band_list(), vec![4, 6, 7]);
    }

    #[test]
    fn test_labels_keep_relative_order() {
        // label 0 is the highest valence band
        let bands = BandSet::from_labels(&[2, 0, -3, 1, -1], 10).unwrap();
        assert_eq!(bands.valence(), &[10, 7, 9]);
        assert_eq!(bands.conduction(), &[12, 11]);
    }

    #[test]
    fn test_labels_without_conduction_rejected() {
        let err = BandSet::from_labels(&[-2, -1, 0], 4).unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyBandPartition {
                n_valence: 3,
                n_conduction: 0
            }
        );
        assert!(BandSet::from_labels(&[], 4).is_err());
    }

    #[test]
    fn test_band_window() {
        let bands = BandSet::window(3, 1, 5).unwrap();
        assert_eq!(bands.valence(), &[3, 4]);
        assert_eq!(bands.conduction(), &[7, 8]);
        assert_eq!(bands.labels(), &[-2, -1, 2, 3]);
    }

    #[test]
    fn test_band_window_is_symmetric() {
        let fermi = 7;
        for n_bands in 2..8 {
            for n_removed in 1..n_bands {
                let bands = BandSet::window(n_bands, n_removed, fermi).unwrap();
                let expected = (n_bands - n_removed) as usize;
                assert_eq!(bands.valence().len(), expected);
                assert_eq!(bands.conduction().len(), expected);

                assert!(bands.valence().iter().all(|&v| v <= fermi));
                assert!(bands.conduction().iter().all(|&c| c > fermi));

                // mirror image across fermi + 1/2
                for (v, c) in bands.valence().iter().rev().zip(bands.conduction()) {
                    assert_eq!(fermi - v, c - fermi - 1);
                }
            }
        }
    }

    #[test]
    fn test_invalid_band_window_rejected() {
        for (n_bands, n_removed) in [(0, 1), (3, 0), (2, 2), (2, 5), (-1, -1)] {
            let err = BandSet::window(n_bands, n_removed, 5).unwrap_err();
            assert_eq!(err, ValidationError::InvalidBandWindow { n_bands, n_removed });
        }
    }

    #[test]
    fn test_labels_beyond_index_range_rejected() {
        let err = BandSet::from_labels(&[-1, i64::MAX], 5).unwrap_err();
        assert_eq!(err, ValidationError::BandOutOfRange(i64::MAX));

        let err = BandSet::from_labels(&[i64::MIN, 1], -1).unwrap_err();
        assert_eq!(err, ValidationError::BandOutOfRange(i64::MIN));

        // extreme labels are fine as long as the absolute index fits
        let bands = BandSet::from_labels(&[-1, i64::MAX - 5], -5).unwrap();
        assert_eq!(bands.conduction(), &[i64::MAX - 10]);
    }

    #[test]
    fn test_oversized_band_window_rejected() {
        for (n_bands, n_removed, fermi) in [
            (i64::MAX, 1, 5),
            (MAX_BAND_WINDOW + 1, 1, 5),
            (10, 1, i64::MAX - 3),
            (10, 1, i64::MIN + 3),
        ] {
            let err = BandSet::window(n_bands, n_removed, fermi).unwrap_err();
            assert_eq!(err, ValidationError::InvalidBandWindow { n_bands, n_removed });
        }

        let bands = BandSet::window(MAX_BAND_WINDOW, MAX_BAND_WINDOW - 1, 5).unwrap();
        assert_eq!(bands.valence(), &[5 - (MAX_BAND_WINDOW - 1)]);
        assert_eq!(bands.conduction(), &[5 + MAX_BAND_WINDOW]);
    }

    #[test]
    fn test_band_index_is_bijection() {
        let labels = [9, 3, 14, -2, 6];
        let index = BandIndex::new(&labels);

        assert_eq!(index.len(), labels.len());
        for (position, &label) in labels.iter().enumerate() {
            assert_eq!(index.slot(label), Ok(position));
            assert_eq!(index.label(position), Some(label));
        }
        assert_eq!(index.label(labels.len()), None);
    }

    #[test]
    fn test_band_index_missing_band() {
        let index = BandIndex::new(&[4, 6, 7]);
        assert_eq!(index.slot(5), Err(ExcitonError::MissingBand(5)));
        assert!(!index.contains(5));
        assert!(index.contains(6));
    }

    #[test]
    fn test_band_index_repeated_labels() {
        let index = BandIndex::new(&[4, 6, 4, 7, 6]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.labels(), &[4, 6, 7]);
        assert_eq!(index.slot(7), Ok(2));
    }

    #[test]
    fn test_band_index_from_band_set() {
        let bands = BandSet::from_labels(&[1, -1, 2, 0], 3).unwrap();
        let index = BandIndex::from(&bands);
        // valence first, then conduction
        assert_eq!(index.labels(), &[2, 3, 4, 5]);
        assert_eq!(index.slot(4), Ok(2));
    }
}
