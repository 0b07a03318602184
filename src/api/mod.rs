pub mod lookup;
pub mod resource;

use crate::model::{Entity, Lookup};
use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorInternalServerError};
use futures::future::{Ready, ready};
use strum_macros::Display;

#[derive(Debug, Copy, Clone, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
    Lookup,
}

/// Entity served by the enclosing scope, registered with `Scope::app_data`.
#[derive(Debug, Copy, Clone)]
pub struct Resource(pub &'static Entity);

/// Lookup served by the enclosing resource.
#[derive(Debug, Copy, Clone)]
pub struct LookupRoute(pub &'static Lookup);

fn from_app_data<T: Copy + 'static>(req: &HttpRequest) -> Ready<Result<T, actix_web::Error>> {
    match req.app_data::<T>() {
        Some(v) => ready(Ok(*v)),
        None => ready(Err(ErrorInternalServerError("Route descriptor missing"))),
    }
}

impl FromRequest for Resource {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        from_app_data(req)
    }
}

impl FromRequest for LookupRoute {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        from_app_data(req)
    }
}
