//! Pipeline orchestration: code the media, discard hopeless elements, run
//! the bisection search, assemble blocks, canonicalize their placement.

use crate::algorithm::SnakeProducer;
use crate::blocks::BlockAssembler;
use crate::cancel::{CancelCallback, CancelController};
use crate::coded_media::CodedMedia;
use crate::config::DiffConfig;
use crate::diff::{DiffBlock, DiffError};
use crate::discard::{AbsenceDetector, ConfusionDetector, FilteredMedia, ThresholdDetector};
use crate::media::Media;
use crate::shift::shift_blocks;
use crate::transform::{translate_blocks, IndexTransformer};
use std::hash::Hash;

/// Diffs a media with the confusion detector implied by the config and no
/// index remapping.
pub fn try_diff_media<M>(
    media: &M,
    config: &DiffConfig,
    cancel: &dyn CancelCallback,
) -> Result<Vec<DiffBlock>, DiffError>
where
    M: Media + ?Sized,
    M::Item: Hash + Eq,
{
    match config.provisional_threshold {
        Some(provisional_threshold) => {
            let detector = ThresholdDetector {
                provisional_threshold,
            };
            diff_pipeline(media, config, cancel, &detector, None)
        }
        None => diff_pipeline(media, config, cancel, &AbsenceDetector, None),
    }
}

/// Full-control entry point: explicit detector and caller-side index
/// transformer.
pub fn try_diff_media_with<M>(
    media: &M,
    config: &DiffConfig,
    cancel: &dyn CancelCallback,
    detector: &dyn ConfusionDetector,
    transformer: &dyn IndexTransformer,
) -> Result<Vec<DiffBlock>, DiffError>
where
    M: Media + ?Sized,
    M::Item: Hash + Eq,
{
    diff_pipeline(media, config, cancel, detector, Some(transformer))
}

fn diff_pipeline<M>(
    media: &M,
    config: &DiffConfig,
    cancel: &dyn CancelCallback,
    detector: &dyn ConfusionDetector,
    transformer: Option<&dyn IndexTransformer>,
) -> Result<Vec<DiffBlock>, DiffError>
where
    M: Media + ?Sized,
    M::Item: Hash + Eq,
{
    let mut cancel = CancelController::new(cancel);
    cancel.check()?;

    let coded = CodedMedia::build(media);
    let filtered = if config.enable_discard {
        FilteredMedia::build(&coded, detector)
    } else {
        FilteredMedia::identity(&coded)
    };

    let mut producer = SnakeProducer::new(&filtered.left, &filtered.right);
    let mut assembler = BlockAssembler::new(&filtered.left_map, &filtered.right_map);
    producer.run(&mut assembler, &mut cancel)?;
    let mut blocks = assembler.finish(coded.left_len(), coded.right_len())?;

    if config.shift_blocks {
        shift_blocks(&mut blocks, coded.left_symbols(), coded.right_symbols());
    }

    if let Some(transformer) = transformer {
        blocks = translate_blocks(blocks, transformer, coded.left_len(), coded.right_len());
    }
    Ok(blocks)
}
