//! Template editing operations.
//!
//! Everything here is immutable-update style: an operation consumes the
//! current value and returns the next one, so discarding the result abandons
//! the edit. Operations that can shift array positions also return the
//! adjusted "currently edited step" index, keeping an open step editor
//! pointing at the same logical step across structural changes.

use std::collections::BTreeSet;

use uuid::Uuid;

use crate::dtos::{TemplateData, TemplateItemData};
use crate::error::EditorError;
use crate::models::{StepAction, StepPermission, StepRole, TemplateDraft, TemplateStep};

/// Direction for the adjacent-swap move operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Transient editor state for a single step.
///
/// The permission pair set is the authoritative state; `allowed_roles` and
/// `allowed_actions` are recomputed projections of it after every toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct StepForm {
    pub title: String,
    pub description: String,
    pub estimated_days: u32,
    pub is_required: bool,
    pub permissions: BTreeSet<StepPermission>,
    pub allowed_roles: Vec<StepRole>,
    pub allowed_actions: Vec<StepAction>,
}

impl Default for StepForm {
    fn default() -> Self {
        Self::new()
    }
}

impl StepForm {
    /// Blank form for a new step. Steps default to required with zero days.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            estimated_days: 0,
            is_required: true,
            permissions: BTreeSet::new(),
            allowed_roles: Vec::new(),
            allowed_actions: Vec::new(),
        }
    }

    /// Form pre-populated from an existing step.
    ///
    /// The pair set is rebuilt as the cross product of the stored role and
    /// action arrays. The persisted form keeps only the two projections, so a
    /// non-rectangular matrix cannot be represented there; the cross product
    /// is the widest set consistent with what was stored.
    pub fn from_step(step: &TemplateStep) -> Self {
        let mut permissions = BTreeSet::new();
        for &role in &step.allowed_roles {
            for &action in &step.allowed_actions {
                permissions.insert(StepPermission::new(role, action));
            }
        }

        let mut form = Self {
            title: step.title.clone(),
            description: step.description.clone().unwrap_or_default(),
            estimated_days: step.estimated_days,
            is_required: step.is_required,
            permissions,
            allowed_roles: Vec::new(),
            allowed_actions: Vec::new(),
        };
        form.reproject();
        form
    }

    /// Grant or revoke a single role/action cell, then recompute both
    /// projection arrays so they exactly mirror the surviving pairs.
    pub fn toggle_permission(mut self, role: StepRole, action: StepAction, enabled: bool) -> Self {
        let cell = StepPermission::new(role, action);
        if enabled {
            self.permissions.insert(cell);
        } else {
            self.permissions.remove(&cell);
        }
        self.reproject();
        self
    }

    /// Whether the given matrix cell is currently granted.
    pub fn is_granted(&self, role: StepRole, action: StepAction) -> bool {
        self.permissions.contains(&StepPermission::new(role, action))
    }

    fn reproject(&mut self) {
        self.allowed_roles = StepRole::ALL
            .into_iter()
            .filter(|role| self.permissions.iter().any(|p| p.role == *role))
            .collect();
        self.allowed_actions = StepAction::ALL
            .into_iter()
            .filter(|action| self.permissions.iter().any(|p| p.action == *action))
            .collect();
    }

    fn into_step(
        self,
        existing: Option<&TemplateStep>,
        order: usize,
    ) -> Result<TemplateStep, EditorError> {
        if self.title.trim().is_empty() {
            return Err(EditorError::EmptyStepTitle);
        }

        Ok(TemplateStep {
            temp_id: existing.map(|s| s.temp_id).unwrap_or_else(Uuid::new_v4),
            id: existing.and_then(|s| s.id),
            title: self.title,
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description)
            },
            estimated_days: self.estimated_days,
            is_required: self.is_required,
            order,
            allowed_roles: self.allowed_roles,
            allowed_actions: self.allowed_actions,
        })
    }
}

impl TemplateDraft {
    /// Commit a step form into the template.
    ///
    /// With `index` the step at that position is replaced, keeping its
    /// identity; without it the step is appended. Fails before any mutation
    /// when the title is empty or the index is out of range.
    pub fn commit_step(
        mut self,
        form: StepForm,
        index: Option<usize>,
    ) -> Result<Self, EditorError> {
        match index {
            Some(i) => {
                let existing = self.steps.get(i).ok_or(EditorError::IndexOutOfBounds {
                    index: i,
                    len: self.steps.len(),
                })?;
                self.steps[i] = form.into_step(Some(existing), i)?;
            }
            None => {
                let step = form.into_step(None, self.steps.len())?;
                self.steps.push(step);
            }
        }
        self.renumber();
        Ok(self)
    }

    /// Remove a step and renumber the survivors.
    ///
    /// Deleting the step under edit closes the editor; deleting an earlier
    /// step shifts the editing index down by one so it still addresses the
    /// same surviving step.
    pub fn delete_step(mut self, index: usize, editing: Option<usize>) -> (Self, Option<usize>) {
        if index >= self.steps.len() {
            return (self, editing);
        }

        self.steps.remove(index);
        self.renumber();

        let editing = match editing {
            Some(e) if e == index => None,
            Some(e) if e > index => Some(e - 1),
            other => other,
        };
        (self, editing)
    }

    /// Drag-and-drop reordering.
    ///
    /// The dragged step is removed first, so a forward drag lands one slot
    /// before the raw drop index. The editing index is then shifted so an
    /// open editor still addresses the step it addressed before the drag.
    /// Calls with `from == to` or out-of-range indices leave everything
    /// unchanged.
    pub fn reorder_step(
        mut self,
        from: usize,
        to: usize,
        editing: Option<usize>,
    ) -> (Self, Option<usize>) {
        let len = self.steps.len();
        if from == to || from >= len || to >= len {
            return (self, editing);
        }

        let dragged = self.steps.remove(from);
        let insert_at = if from < to { to - 1 } else { to };
        self.steps.insert(insert_at, dragged);
        self.renumber();

        let editing = editing.map(|e| {
            if e == from {
                insert_at
            } else if from < e && insert_at >= e {
                e - 1
            } else if from > e && insert_at <= e {
                e + 1
            } else {
                e
            }
        });
        (self, editing)
    }

    /// Swap a step with its neighbour. No-op at either end of the list.
    pub fn move_step(mut self, index: usize, direction: MoveDirection) -> Self {
        let len = self.steps.len();
        let target = match direction {
            MoveDirection::Up if index > 0 && index < len => index - 1,
            MoveDirection::Down if index + 1 < len => index + 1,
            _ => return self,
        };
        self.steps.swap(index, target);
        self.renumber();
        self
    }

    /// Sum of estimated days across all steps.
    pub fn total_estimated_days(&self) -> u32 {
        self.steps.iter().map(|s| s.estimated_days).sum()
    }

    /// Snapshot for persistence.
    ///
    /// `order` comes from the array position of each step, never from the
    /// stored order fields, and empty role/action arrays are omitted.
    pub fn to_payload(&self) -> Result<TemplateData, EditorError> {
        if self.name.trim().is_empty() {
            return Err(EditorError::EmptyTemplateName);
        }
        if self.steps.is_empty() {
            return Err(EditorError::NoSteps);
        }

        Ok(TemplateData {
            name: self.name.clone(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            program_id: self.program_id,
            department_id: self.department_id,
            is_default: self.is_default,
            items: self
                .steps
                .iter()
                .enumerate()
                .map(|(index, step)| TemplateItemData {
                    title: step.title.clone(),
                    description: step.description.clone(),
                    estimated_days: step.estimated_days,
                    is_required: step.is_required,
                    order: index,
                    allowed_roles: (!step.allowed_roles.is_empty())
                        .then(|| step.allowed_roles.clone()),
                    allowed_actions: (!step.allowed_actions.is_empty())
                        .then(|| step.allowed_actions.clone()),
                })
                .collect(),
        })
    }

    fn renumber(&mut self) {
        for (i, step) in self.steps.iter_mut().enumerate() {
            step.order = i;
        }
    }
}
