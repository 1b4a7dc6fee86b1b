use super::is_confident;
use crate::{common::*, polygon, result::RawResult};

pub fn convert(
    result: &RawResult,
    confidence_thresh: Option<f64>,
    tolerance: f64,
    filled: bool,
) -> Result<Option<Polylines>> {
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

    let source = if tolerance > 1.0 {
        RingSource::Masks(masks.binarize())
    } else {
        let xyn = masks.xyn().ok_or_else(|| {
            format_err!("the masks carry no polygons to use at tolerance {}", tolerance)
        })?;
        RingSource::Vertices(xyn)
    };

    let polylines: Polylines = izip!(0.., boxes.classes()?, boxes.confidences())
        .filter(|(_, _, confidence)| is_confident(*confidence, confidence_thresh))
        .map(|(index, class, confidence)| -> Result<_> {
            let polyline = Polyline {
                label: result.label_of(class)?.to_string(),
                points: source.rings(index, tolerance),
                confidence: Some(confidence),
                closed: true,
                filled,
            };
            Ok(polyline)
        })
        .collect::<Result<_>>()?;

    debug!("kept {} out of {} polylines", polylines.len(), masks.len());

    Ok(Some(polylines))
}

enum RingSource<'a> {
    Masks(Array3<bool>),
    Vertices(&'a [Array2<f32>]),
}

impl RingSource<'_> {
    fn rings(&self, index: usize, tolerance: f64) -> Vec<Vec<[f64; 2]>> {
        match self {
            Self::Masks(bitmaps) => {
                polygon::trace_polygons(bitmaps.index_axis(Axis(0), index), tolerance)
            }
            Self::Vertices(xyn) => vec![polygon::vertices_to_ring(xyn[index].view())],
        }
    }
}
