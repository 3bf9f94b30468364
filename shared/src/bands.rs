//! Band and mode helpers.
//!
//! The band table in the crate root is ordered by wavelength, so the
//! index of a band doubles as its sort rank. Anything the table does
//! not know sorts after every known band.

use crate::{BANDS, MODES};

/// Sort rank of a band label. Case-insensitive; unknown bands get
/// `usize::MAX` so they land at the end of an ascending sort.
pub fn band_rank(band: &str) -> usize {
    let normalized = band.trim().to_lowercase();
    BANDS
        .iter()
        .position(|known| *known == normalized)
        .unwrap_or(usize::MAX)
}

pub fn is_known_band(band: &str) -> bool {
    band_rank(band) != usize::MAX
}

pub fn is_known_mode(mode: &str) -> bool {
    let normalized = mode.trim().to_uppercase();
    MODES.iter().any(|known| *known == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_follows_wavelength_order() {
        assert_eq!(band_rank("160m"), 0);
        assert!(band_rank("160m") < band_rank("20m"));
        assert!(band_rank("20m") < band_rank("10m"));
        assert_eq!(band_rank("70cm"), BANDS.len() - 1);
    }

    #[test]
    fn rank_ignores_case_and_whitespace() {
        assert_eq!(band_rank("20M"), band_rank("20m"));
        assert_eq!(band_rank(" 40m "), band_rank("40m"));
    }

    #[test]
    fn unknown_band_ranks_last() {
        assert_eq!(band_rank("23cm"), usize::MAX);
        assert_eq!(band_rank(""), usize::MAX);
        assert!(band_rank("10m") < band_rank("23cm"));
    }

    #[test]
    fn known_band_and_mode_checks() {
        assert!(is_known_band("6m"));
        assert!(!is_known_band("4m"));
        assert!(is_known_mode("cw"));
        assert!(is_known_mode("FT8"));
        assert!(!is_known_mode("MFSK"));
    }
}
