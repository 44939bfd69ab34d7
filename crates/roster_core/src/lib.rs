//! Client-side roster controller: keeps an in-memory roster in sync with the
//! collection service and re-derives the presentation after every mutation.

pub mod controller;
pub mod form;
pub mod presenter;
pub mod remote;
pub mod store;
pub mod surface;

pub use controller::{Controller, Outcome};
pub use form::{FormError, FormInput};
pub use presenter::{render, RenderModel, ViewState};
pub use remote::{HttpRemoteClient, RemoteClient};
pub use store::Store;
pub use surface::DisplaySurface;
