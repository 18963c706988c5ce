pub mod bounds;
pub mod byte_order;
pub mod container;
pub mod error;
pub mod factory;
pub mod pointer;
pub mod storage;
pub mod view;

pub use bounds::Bounds;
pub use container::{ContainerView, ContainerViewMut};
pub use error::{Result, SliceError};
pub use factory::{
    IntoPtrView, IntoView, make_ptr_view, make_ptr_view_until, make_view, make_view_all,
    make_view_from, make_view_until,
};
pub use pointer::{PtrView, PtrViewMut};
pub use storage::{Storage, StorageMut};
pub use view::{View, ViewMut};
