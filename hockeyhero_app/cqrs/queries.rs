use std::marker::PhantomData;

use crate::{cqrs::Query, resource::Resource};

/// Lists every record, optionally narrowed by a named filter.
#[derive(Debug)]
pub struct ListResources<R: Resource> {
    pub filter: Option<String>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ListResources<R> {
    pub fn new(filter: Option<String>) -> Self {
        Self {
            filter,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> Query for ListResources<R> {
    type Output = Vec<R>;
}

#[derive(Debug)]
pub struct GetResource<R: Resource> {
    pub id: i64,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> GetResource<R> {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> Query for GetResource<R> {
    type Output = R;
}
