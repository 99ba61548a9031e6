/// Expands operator templates for a specific ISA and element type.
///
/// Takes a module name, an ISA identifier, the element type and the
/// register/mask value types, and generates a module holding the
/// register-level operators for that combination.
#[macro_export]
macro_rules! expand_isa_impls {
    ($module_name:ident, $isa:ident, $elem:ident, $vreg:ident, $vmask:ident) => {
        pub mod $module_name {
            use $crate::types::{$vmask, $vreg};

            $crate::define_vadd_ops!($isa, $elem, $vreg, $vmask);
        }
    };
}
