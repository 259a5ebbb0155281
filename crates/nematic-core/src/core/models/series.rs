use crate::core::order::eigen::NematicOrder;
use nalgebra::{Unit, Vector3};

/// Order parameter and director of one trajectory frame.
///
/// `measurement` is `None` when the frame has no bonds; the order is then
/// undefined, which is distinct from an order of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderResult {
    pub frame_index: usize,
    pub measurement: Option<NematicOrder>,
}

impl OrderResult {
    pub fn defined(frame_index: usize, measurement: NematicOrder) -> Self {
        Self {
            frame_index,
            measurement: Some(measurement),
        }
    }

    pub fn undefined(frame_index: usize) -> Self {
        Self {
            frame_index,
            measurement: None,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.measurement.is_some()
    }

    pub fn order(&self) -> Option<f64> {
        self.measurement.map(|m| m.order)
    }

    pub fn director(&self) -> Option<Unit<Vector3<f64>>> {
        self.measurement.map(|m| m.director)
    }
}

/// Per-frame order results in frame traversal order.
///
/// Built once per query and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderTimeSeries {
    results: Vec<OrderResult>,
}

impl OrderTimeSeries {
    pub(crate) fn from_results(results: Vec<OrderResult>) -> Self {
        debug_assert!(
            results
                .windows(2)
                .all(|w| w[0].frame_index < w[1].frame_index),
            "order results must be sorted by frame index"
        );
        Self { results }
    }

    pub fn results(&self) -> &[OrderResult] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&OrderResult> {
        self.results.get(position)
    }

    pub fn frame_indices(&self) -> Vec<usize> {
        self.results.iter().map(|r| r.frame_index).collect()
    }

    /// Order values of the frames where it is defined, in series order.
    pub fn defined_orders(&self) -> Vec<f64> {
        self.results.iter().filter_map(OrderResult::order).collect()
    }

    pub fn num_undefined(&self) -> usize {
        self.results.iter().filter(|r| !r.is_defined()).count()
    }

    /// Mean order over the frames where it is defined, or `None` if there are none.
    pub fn mean_order(&self) -> Option<f64> {
        let orders = self.defined_orders();
        if orders.is_empty() {
            None
        } else {
            Some(orders.iter().sum::<f64>() / orders.len() as f64)
        }
    }

    pub fn into_results(self) -> Vec<OrderResult> {
        self.results
    }
}

impl<'a> IntoIterator for &'a OrderTimeSeries {
    type Item = &'a OrderResult;
    type IntoIter = std::slice::Iter<'a, OrderResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
