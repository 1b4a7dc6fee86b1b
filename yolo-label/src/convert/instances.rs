use super::is_confident;
use crate::{common::*, result::RawResult};

pub fn convert(result: &RawResult, confidence_thresh: Option<f64>) -> Result<Option<Detections>> {
    let masks = match &result.masks {
        Some(masks) => masks,
        None => return Ok(None),
    };
    let boxes = result.require_boxes()?;
    ensure!(
        masks.len() == boxes.len(),
        "expect {} masks, but get {}",
        boxes.len(),
        masks.len()
    );

    let bitmaps = masks.binarize();
    let rects = boxes.rects()?.iter().map(XYWH::from).collect::<Vec<_>>();

    let detections: Detections = izip!(
        boxes.classes()?,
        rects,
        bitmaps.outer_iter(),
        boxes.confidences()
    )
    .filter(|(_, _, _, confidence)| is_confident(*confidence, confidence_thresh))
    .map(|(class, rect, bitmap, confidence)| -> Result<_> {
        let label = result.label_of(class)?;
        let mask = crop_mask(bitmap, &rect);
        if mask.is_empty() {
            warn!("the box {:?} of '{}' crops an empty mask", rect.xywh(), label);
        }

        let detection = Detection::new(label, &rect)
            .with_confidence(confidence)
            .with_mask(mask);
        Ok(detection)
    })
    .collect::<Result<_>>()?;

    debug!("kept {} out of {} instances", detections.len(), masks.len());

    Ok(Some(detections))
}

/// Crops a full-image mask to the pixels covered by a normalized box.
///
/// The box's x extent is scaled by the mask's column count and its y extent
/// by its row count. Pixel bounds are truncated toward zero and clamped to
/// the mask.
pub fn crop_mask(mask: ArrayView2<'_, bool>, rect: &XYWH<f64>) -> Mask {
    let (rows, cols) = mask.dim();
    let pixel_rect = &Transform::denormalize(cols as f64, rows as f64) * &XYXY::from(rect);
    let (xs, ys) = pixel_rect.to_index_ranges(cols, rows);
    mask.slice(s![ys, xs]).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_non_square_mask() {
        // 4 rows by 8 columns, set on rows 1..3 and columns 2..6
        let mut mask = Array2::from_elem((4, 8), false);
        mask.slice_mut(s![1..3, 2..6]).fill(true);

        let rect = XYWH::try_from_xywh([0.25, 0.25, 0.5, 0.5]).unwrap();
        let crop = crop_mask(mask.view(), &rect);
        assert_eq!(crop.dim(), (2, 4));
        assert!(crop.iter().all(|&value| value));
    }

    #[test]
    fn crop_out_of_bounds_box_is_clamped() {
        let mask = Array2::from_elem((10, 10), true);
        let rect = XYWH::try_from_xywh([-0.2, 0.8, 0.5, 0.5]).unwrap();
        let crop = crop_mask(mask.view(), &rect);
        assert_eq!(crop.dim(), (2, 3));
    }
}
