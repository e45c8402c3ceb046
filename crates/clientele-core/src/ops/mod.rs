pub mod person_ops;
pub mod policy_ops;
pub mod task_ops;

use crate::commons::Index;
use crate::errors::{ClienteleError, Result};
use crate::model::EntityKind;

/// Clone the element shown at `index` of a filtered view
pub(crate) fn shown_at<T: Clone>(shown: &[&T], index: Index, entity: EntityKind) -> Result<T> {
    shown
        .get(index.zero_based())
        .map(|item| (*item).clone())
        .ok_or(ClienteleError::InvalidIndex { entity })
}
