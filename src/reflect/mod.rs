//! @module "Reflection"
//! @summary "Member listing abstraction over a declared type"
//! @layer service
//!
//! The accessor never inspects types itself. It asks a [`MemberLister`] for
//! the type's doc comment and the doc comments of its properties and methods.
//! [`TypeDescriptor`] is the bundled implementation, fed from JSON/YAML
//! descriptor files or built in code.

pub mod descriptor;

pub use descriptor::{MemberDescriptor, TypeDescriptor, TypeRegistry};

use crate::error::Result;

pub trait MemberLister {
    /// Declared name of the type; empty means "no type"
    fn type_name(&self) -> &str;

    /// Doc comment of the type itself, empty when undocumented
    fn class_doc(&self) -> &str;

    fn property_names(&self) -> Vec<&str>;

    fn method_names(&self) -> Vec<&str>;

    /// Doc comment of one property, `PropertyNotFound` when it is not declared
    fn property_doc(&self, name: &str) -> Result<&str>;

    /// Doc comment of one method, `MethodNotFound` when it is not declared
    fn method_doc(&self, name: &str) -> Result<&str>;
}

impl<T: MemberLister + ?Sized> MemberLister for &T {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn class_doc(&self) -> &str {
        (**self).class_doc()
    }

    fn property_names(&self) -> Vec<&str> {
        (**self).property_names()
    }

    fn method_names(&self) -> Vec<&str> {
        (**self).method_names()
    }

    fn property_doc(&self, name: &str) -> Result<&str> {
        (**self).property_doc(name)
    }

    fn method_doc(&self, name: &str) -> Result<&str> {
        (**self).method_doc(name)
    }
}
