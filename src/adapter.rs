//! Capability contracts implemented by domain types.
//!
//! Each capability is a small trait. A domain type picks the ones it
//! supports and advertises them through the lookup traits [`ReadAdapter`]
//! and [`WriteAdapter`], whose methods all default to `None`. The
//! conversion functions in [`api`](crate::api) only call a capability
//! after the lookup returned it.
//!
//! ```
//! use jsonapi_core::adapter::{AttributesRead, IdentityRead};
//! use jsonapi_core::error::AdapterResult;
//! use jsonapi_core::serialization::Meta;
//! use jsonapi_core::read_adapter;
//!
//! struct Tag {
//!     id: u32,
//!     label: String,
//! }
//!
//! impl IdentityRead for Tag {
//!     fn resource_id(&self) -> AdapterResult<String> {
//!         Ok(self.id.to_string())
//!     }
//!
//!     fn resource_type(&self) -> AdapterResult<String> {
//!         Ok("tags".to_string())
//!     }
//! }
//!
//! impl AttributesRead for Tag {
//!     fn attributes(&self) -> AdapterResult<Meta> {
//!         let mut attrs = Meta::new();
//!         attrs.insert("label".into(), self.label.clone().into());
//!         Ok(attrs)
//!     }
//! }
//!
//! read_adapter!(Tag: identity, attributes);
//!
//! let tag = Tag { id: 3, label: "rust".into() };
//! let resource = jsonapi_core::to_resource(&tag, true).unwrap();
//! assert_eq!(resource.id, "3");
//! assert_eq!(resource.attributes.unwrap()["label"], "rust");
//! ```

use crate::error::AdapterResult;
use crate::links::Links;
use crate::relationships::Relationships;
use crate::serialization::Meta;

/// Supplies `id` and `type`. Required by [`to_resource`](crate::api::to_resource).
pub trait IdentityRead {
    fn resource_id(&self) -> AdapterResult<String>;
    fn resource_type(&self) -> AdapterResult<String>;
}

/// Accepts `id` and `type`. Required by [`from_resource`](crate::api::from_resource).
pub trait IdentityWrite {
    /// Not called when the incoming resource has an empty `id`.
    fn set_resource_id(&mut self, id: &str) -> AdapterResult<()>;
    /// Usually a check that `kind` names this type.
    fn set_resource_type(&mut self, kind: &str) -> AdapterResult<()>;
}

pub trait AttributesRead {
    fn attributes(&self) -> AdapterResult<Meta>;
}

pub trait AttributesWrite {
    fn set_attributes(&mut self, attributes: Option<&Meta>) -> AdapterResult<()>;
}

pub trait RelationshipsRead {
    fn relationships(&self) -> AdapterResult<Relationships>;
}

pub trait RelationshipsWrite {
    fn set_relationships(&mut self, relationships: &Relationships) -> AdapterResult<()>;
}

pub trait LinksRead {
    fn links(&self) -> AdapterResult<Links>;
}

pub trait MetaRead {
    fn meta(&self) -> AdapterResult<Meta>;
}

// Links and meta are server-assigned, so there is no write side for them.

/// Lookups for the read capabilities of a domain type.
pub trait ReadAdapter {
    fn as_identity(&self) -> Option<&dyn IdentityRead> {
        None
    }

    fn as_attributes(&self) -> Option<&dyn AttributesRead> {
        None
    }

    fn as_relationships(&self) -> Option<&dyn RelationshipsRead> {
        None
    }

    fn as_links(&self) -> Option<&dyn LinksRead> {
        None
    }

    fn as_meta(&self) -> Option<&dyn MetaRead> {
        None
    }
}

/// Lookups for the write capabilities of a domain type.
pub trait WriteAdapter {
    fn as_identity_mut(&mut self) -> Option<&mut dyn IdentityWrite> {
        None
    }

    fn as_attributes_mut(&mut self) -> Option<&mut dyn AttributesWrite> {
        None
    }

    fn as_relationships_mut(&mut self) -> Option<&mut dyn RelationshipsWrite> {
        None
    }
}

impl<T: ReadAdapter + ?Sized> ReadAdapter for &T {
    fn as_identity(&self) -> Option<&dyn IdentityRead> {
        (**self).as_identity()
    }

    fn as_attributes(&self) -> Option<&dyn AttributesRead> {
        (**self).as_attributes()
    }

    fn as_relationships(&self) -> Option<&dyn RelationshipsRead> {
        (**self).as_relationships()
    }

    fn as_links(&self) -> Option<&dyn LinksRead> {
        (**self).as_links()
    }

    fn as_meta(&self) -> Option<&dyn MetaRead> {
        (**self).as_meta()
    }
}

impl<T: ReadAdapter + ?Sized> ReadAdapter for Box<T> {
    fn as_identity(&self) -> Option<&dyn IdentityRead> {
        (**self).as_identity()
    }

    fn as_attributes(&self) -> Option<&dyn AttributesRead> {
        (**self).as_attributes()
    }

    fn as_relationships(&self) -> Option<&dyn RelationshipsRead> {
        (**self).as_relationships()
    }

    fn as_links(&self) -> Option<&dyn LinksRead> {
        (**self).as_links()
    }

    fn as_meta(&self) -> Option<&dyn MetaRead> {
        (**self).as_meta()
    }
}

/// Implements [`ReadAdapter`] for a type, exposing the listed capabilities.
///
/// Capability names: `identity`, `attributes`, `relationships`, `links`,
/// `meta`. The type must implement the matching traits.
#[macro_export]
macro_rules! read_adapter {
    (@cap identity) => {
        fn as_identity(&self) -> Option<&dyn $crate::adapter::IdentityRead> {
            Some(self)
        }
    };
    (@cap attributes) => {
        fn as_attributes(&self) -> Option<&dyn $crate::adapter::AttributesRead> {
            Some(self)
        }
    };
    (@cap relationships) => {
        fn as_relationships(&self) -> Option<&dyn $crate::adapter::RelationshipsRead> {
            Some(self)
        }
    };
    (@cap links) => {
        fn as_links(&self) -> Option<&dyn $crate::adapter::LinksRead> {
            Some(self)
        }
    };
    (@cap meta) => {
        fn as_meta(&self) -> Option<&dyn $crate::adapter::MetaRead> {
            Some(self)
        }
    };
    ($ty:ty $(: $($cap:ident),* $(,)?)?) => {
        impl $crate::adapter::ReadAdapter for $ty {
            $($($crate::read_adapter!(@cap $cap);)*)?
        }
    };
}

/// Implements [`WriteAdapter`] for a type, exposing the listed capabilities.
///
/// Capability names: `identity`, `attributes`, `relationships`.
#[macro_export]
macro_rules! write_adapter {
    (@cap identity) => {
        fn as_identity_mut(&mut self) -> Option<&mut dyn $crate::adapter::IdentityWrite> {
            Some(self)
        }
    };
    (@cap attributes) => {
        fn as_attributes_mut(&mut self) -> Option<&mut dyn $crate::adapter::AttributesWrite> {
            Some(self)
        }
    };
    (@cap relationships) => {
        fn as_relationships_mut(
            &mut self,
        ) -> Option<&mut dyn $crate::adapter::RelationshipsWrite> {
            Some(self)
        }
    };
    ($ty:ty $(: $($cap:ident),* $(,)?)?) => {
        impl $crate::adapter::WriteAdapter for $ty {
            $($($crate::write_adapter!(@cap $cap);)*)?
        }
    };
}
