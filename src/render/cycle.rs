//! Cycle detection over field graphs.

use std::collections::{HashMap, HashSet};

use crate::document::Field;
use crate::error::{CycleError, CyclicFieldError, NilFieldError};

/// Walks every descendant of `root` and fails if a field is reachable from
/// itself or a child slot is empty.
///
/// Identity is by address: two distinct fields with the same content are not
/// a cycle. A field shared by several parents is walked once.
///
/// # Errors
///
/// Returns [`CycleError::Nil`] for an empty child slot and
/// [`CycleError::Cyclic`] naming the field that was revisited.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use graphql_builder::{check_cycle, make_field, CycleError};
///
/// let a = make_field("a").into_ref();
/// let b = make_field("b").add_field_ref(Rc::clone(&a)).into_ref();
/// a.borrow_mut().fields.push(Some(Rc::clone(&b)));
///
/// let err = check_cycle(&a.borrow()).unwrap_err();
/// assert!(matches!(err, CycleError::Cyclic(_)));
/// # a.borrow_mut().fields.clear();
/// ```
pub fn check_cycle(root: &Field) -> Result<(), CycleError> {
    Walk::default().visit(root)
}

#[derive(Default)]
struct Walk {
    // Fields on the current path from the root, with their names. A field on
    // this path may be mutably borrowed by the caller, so it is never borrowed
    // again while the walk is below it.
    active: HashMap<*const Field, String>,
    finished: HashSet<*const Field>,
}

impl Walk {
    fn visit(&mut self, field: &Field) -> Result<(), CycleError> {
        let id: *const Field = field;
        self.active.insert(id, field.name.clone());

        for slot in &field.fields {
            let child = slot.as_ref().ok_or(NilFieldError)?;
            let child_id = child.as_ptr().cast_const();

            if let Some(name) = self.active.get(&child_id) {
                return Err(CyclicFieldError { field: name.clone() }.into());
            }
            if self.finished.contains(&child_id) {
                continue;
            }
            self.visit(&child.borrow())?;
        }

        self.active.remove(&id);
        self.finished.insert(id);
        Ok(())
    }
}
