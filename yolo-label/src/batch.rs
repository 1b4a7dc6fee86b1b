use crate::{common::*, result::RawResult};

/// Either a single item or an ordered list of items.
///
/// Converters accept results in either shape and hand back their output in
/// the same shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Batch<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Batch<T> {
    pub fn is_one(&self) -> bool {
        matches!(self, Self::One(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::One(item) => std::slice::from_ref(item).iter(),
            Self::Many(items) => items.iter(),
        }
    }

    pub fn into_one(self) -> Option<T> {
        match self {
            Self::One(item) => Some(item),
            Self::Many(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }

    pub fn map<U, F>(self, mut f: F) -> Batch<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Self::One(item) => Batch::One(f(item)),
            Self::Many(items) => Batch::Many(items.into_iter().map(f).collect()),
        }
    }

    pub fn try_map<U, F>(self, mut f: F) -> Result<Batch<U>>
    where
        F: FnMut(T) -> Result<U>,
    {
        Ok(match self {
            Self::One(item) => Batch::One(f(item)?),
            Self::Many(items) => Batch::Many(items.into_iter().map(f).collect::<Result<_>>()?),
        })
    }
}

impl<'a> From<&'a RawResult> for Batch<&'a RawResult> {
    fn from(from: &'a RawResult) -> Self {
        Self::One(from)
    }
}

impl<'a> From<&'a [RawResult]> for Batch<&'a RawResult> {
    fn from(from: &'a [RawResult]) -> Self {
        Self::Many(from.iter().collect())
    }
}

impl<'a> From<&'a Vec<RawResult>> for Batch<&'a RawResult> {
    fn from(from: &'a Vec<RawResult>) -> Self {
        Self::from(from.as_slice())
    }
}

impl<T> From<Vec<T>> for Batch<T> {
    fn from(from: Vec<T>) -> Self {
        Self::Many(from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_preserves_shape() {
        let one = Batch::One(3).map(|value| value * 2);
        assert_eq!(one, Batch::One(6));

        let many = Batch::Many(vec![1, 2, 3]).map(|value| value + 1);
        assert_eq!(many, Batch::Many(vec![2, 3, 4]));

        let empty: Batch<i32> = Batch::Many(vec![]);
        assert!(empty.map(|value| value).is_empty());
    }

    #[test]
    fn try_map_stops_on_error() {
        let result = Batch::Many(vec![1, -1, 2]).try_map(|value| {
            ensure!(value > 0, "negative value");
            Ok(value)
        });
        assert!(result.is_err());
    }

    #[test]
    fn single_unwraps_to_one() {
        let batch = Batch::One("only");
        assert!(batch.is_one());
        assert_eq!(batch.iter().count(), 1);
        assert_eq!(batch.into_one(), Some("only"));
        assert_eq!(Batch::Many(vec!["a"]).into_one(), None);
    }
}
