//! Pre-filter that drops elements provably absent from any common
//! subsequence, bounding the cost of the O(ND) search.
//!
//! An element whose symbol never occurs on the opposite side can never be
//! matched, so it is discarded before the search and re-inserted into a
//! difference block afterwards via the index maps kept here. Discarding never
//! reorders: the compacted sequences preserve source order and the maps are
//! strictly increasing.

use crate::coded_media::CodedMedia;
use crate::symbol_pool::SymbolId;

/// Policy deciding how an opposite-side occurrence count classifies an
/// element.
pub trait ConfusionDetector {
    /// The element provably cannot participate in a common subsequence.
    fn is_absolute(&self, occurrences: u32) -> bool;

    /// The element occurs so often it would flood the search with spurious
    /// candidate matches.
    fn is_provisional(&self, occurrences: u32) -> bool {
        let _ = occurrences;
        false
    }
}

/// Default policy: discard only elements with zero opposite-side occurrences.
#[derive(Debug, Default, Clone, Copy)]
pub struct AbsenceDetector;

impl ConfusionDetector for AbsenceDetector {
    fn is_absolute(&self, occurrences: u32) -> bool {
        occurrences == 0
    }
}

/// Absence policy plus a provisional flood threshold.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdDetector {
    pub provisional_threshold: u32,
}

impl ConfusionDetector for ThresholdDetector {
    fn is_absolute(&self, occurrences: u32) -> bool {
        occurrences == 0
    }

    fn is_provisional(&self, occurrences: u32) -> bool {
        occurrences >= self.provisional_threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DiscardClass {
    Kept,
    Absolute,
    Provisional,
}

/// The compacted sequences plus the maps back to pre-filter coordinates.
#[derive(Debug)]
pub(crate) struct FilteredMedia {
    pub(crate) left: Vec<SymbolId>,
    pub(crate) right: Vec<SymbolId>,
    /// Compacted left index -> original left index; strictly increasing.
    pub(crate) left_map: Vec<usize>,
    /// Compacted right index -> original right index; strictly increasing.
    pub(crate) right_map: Vec<usize>,
}

impl FilteredMedia {
    pub(crate) fn build(coded: &CodedMedia, detector: &dyn ConfusionDetector) -> Self {
        let left_hist = histogram(coded.left_symbols(), coded.symbol_count());
        let right_hist = histogram(coded.right_symbols(), coded.symbol_count());

        let (left, left_map) = compact_side(coded.left_symbols(), &right_hist, detector);
        let (right, right_map) = compact_side(coded.right_symbols(), &left_hist, detector);

        Self {
            left,
            right,
            left_map,
            right_map,
        }
    }

    /// Pass-through with identity maps, used when discarding is disabled.
    pub(crate) fn identity(coded: &CodedMedia) -> Self {
        Self {
            left: coded.left_symbols().to_vec(),
            right: coded.right_symbols().to_vec(),
            left_map: (0..coded.left_len()).collect(),
            right_map: (0..coded.right_len()).collect(),
        }
    }
}

fn histogram(symbols: &[SymbolId], symbol_count: usize) -> Vec<u32> {
    let mut counts = vec![0u32; symbol_count];
    for &symbol in symbols {
        counts[symbol.0 as usize] = counts[symbol.0 as usize].saturating_add(1);
    }
    counts
}

fn compact_side(
    symbols: &[SymbolId],
    opposite_hist: &[u32],
    detector: &dyn ConfusionDetector,
) -> (Vec<SymbolId>, Vec<usize>) {
    let classes = classify_side(symbols, opposite_hist, detector);

    let mut kept = Vec::with_capacity(symbols.len());
    let mut map = Vec::with_capacity(symbols.len());
    for (index, (&symbol, &class)) in symbols.iter().zip(classes.iter()).enumerate() {
        // Provisional candidates are recorded but kept: dropping them safely
        // needs run-aware filtering that never discards an isolated
        // candidate, and that heuristic is not implemented yet.
        if class != DiscardClass::Absolute {
            kept.push(symbol);
            map.push(index);
        }
    }
    (kept, map)
}

pub(crate) fn classify_side(
    symbols: &[SymbolId],
    opposite_hist: &[u32],
    detector: &dyn ConfusionDetector,
) -> Vec<DiscardClass> {
    symbols
        .iter()
        .map(|&symbol| {
            let occurrences = opposite_hist[symbol.0 as usize];
            if detector.is_absolute(occurrences) {
                DiscardClass::Absolute
            } else if detector.is_provisional(occurrences) {
                DiscardClass::Provisional
            } else {
                DiscardClass::Kept
            }
        })
        .collect()
}
