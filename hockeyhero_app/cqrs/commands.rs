use crate::{cqrs::Command, resource::Resource};

/// Stores a new record. The record must not carry an id yet.
#[derive(Debug, Clone)]
pub struct CreateResource<R: Resource> {
    pub record: R,
}

impl<R: Resource> Command for CreateResource<R> {
    type Output = R;
}

/// Replaces the stored record `id` with `record`.
#[derive(Debug, Clone)]
pub struct UpdateResource<R: Resource> {
    pub id: i64,
    pub record: R,
}

impl<R: Resource> Command for UpdateResource<R> {
    type Output = R;
}

/// Merges the attributes present in `patch` onto the stored record `id`.
#[derive(Debug)]
pub struct PartialUpdateResource<R: Resource> {
    pub id: i64,
    pub patch: R::Patch,
}

impl<R: Resource> Command for PartialUpdateResource<R> {
    type Output = R;
}

#[derive(Debug)]
pub struct DeleteResource<R: Resource> {
    pub id: i64,
    _resource: std::marker::PhantomData<fn() -> R>,
}

impl<R: Resource> DeleteResource<R> {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            _resource: std::marker::PhantomData,
        }
    }
}

impl<R: Resource> Command for DeleteResource<R> {
    type Output = ();
}
