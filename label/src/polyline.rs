use crate::common::*;

/// A set of polygon rings sharing one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub label: String,
    /// One ordered vertex list per ring, in normalized coordinates.
    pub points: Vec<Vec<[f64; 2]>>,
    pub confidence: Option<f64>,
    pub closed: bool,
    pub filled: bool,
}

impl Polyline {
    pub fn num_vertices(&self) -> usize {
        self.points.iter().map(|ring| ring.len()).sum()
    }

    /// Tight box around every ring, or `None` when there are no vertices.
    pub fn bounding_box(&self) -> Option<XYWH<f64>> {
        let mut vertices = self.points.iter().flatten();
        let &[x, y] = vertices.next()?;
        let [x0, y0, x1, y1] = vertices.fold([x, y, x, y], |[x0, y0, x1, y1], &[x, y]| {
            [x0.min(x), y0.min(y), x1.max(x), y1.max(y)]
        });
        XYWH::try_from_xyxy([x0, y0, x1, y1]).ok()
    }
}

/// The polylines found on one image, in insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polylines {
    pub polylines: Vec<Polyline>,
}

impl Polylines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, polyline: Polyline) {
        self.polylines.push(polyline);
    }

    pub fn len(&self) -> usize {
        self.polylines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polyline> {
        self.polylines.iter()
    }
}

impl FromIterator<Polyline> for Polylines {
    fn from_iter<I: IntoIterator<Item = Polyline>>(iter: I) -> Self {
        Self {
            polylines: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Polylines {
    type Item = Polyline;
    type IntoIter = std::vec::IntoIter<Polyline>;

    fn into_iter(self) -> Self::IntoIter {
        self.polylines.into_iter()
    }
}
