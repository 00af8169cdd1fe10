use braid_collection_derive::Node;

use super::double::DoubleLink;
use super::single::SingleLink;

/// A ready-made singly linked record: a link paired with a data payload.
///
/// For records with their own shape, embed a [`SingleLink`] field named
/// `link` and derive [`Node`] instead.
#[derive(Debug, Node)]
#[node(crate_path = "crate")]
pub struct SingleItem<T> {
    link: SingleLink<SingleItem<T>>,
    data: T,
}

impl<T> SingleItem<T> {
    pub const fn new(data: T) -> Self {
        Self {
            link: SingleLink::new(),
            data,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

impl<T: Default> Default for SingleItem<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// A ready-made ring record: a ring entry paired with a data payload.
#[derive(Debug, Node)]
#[node(crate_path = "crate")]
pub struct DoubleItem<T> {
    link: DoubleLink<DoubleItem<T>>,
    data: T,
}

impl<T> DoubleItem<T> {
    pub const fn new(data: T) -> Self {
        Self {
            link: DoubleLink::new(),
            data,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

impl<T: Default> Default for DoubleItem<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
