//! Boilerplate the generator emits for every node family.
//!
//! A family is a closed enum whose variants are named after, and wrap, the
//! concrete kind of the same name. `node_family!` derives the upcast
//! (`From`), the downcast (`Variant`), and the delegating `Completable` and
//! `Node` impls.

macro_rules! node_family {
    ($family:ident { $($kind:ident),+ $(,)? }) => {
        $(
            impl From<$kind> for $family {
                fn from(node: $kind) -> Self {
                    $family::$kind(node)
                }
            }

            impl ::tree_base::Variant<$kind> for $family {
                fn try_as(&self) -> Option<&$kind> {
                    match self {
                        $family::$kind(node) => Some(node),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }

                fn try_as_mut(&mut self) -> Option<&mut $kind> {
                    match self {
                        $family::$kind(node) => Some(node),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            }
        )+

        impl ::tree_base::Completable for $family {
            fn find_reachable(
                &self,
                map: &mut ::tree_base::PointerMap,
            ) -> Result<(), ::tree_base::NotWellFormed> {
                match self {
                    $($family::$kind(node) => ::tree_base::Completable::find_reachable(node, map),)+
                }
            }

            fn check_complete(
                &self,
                map: &::tree_base::PointerMap,
            ) -> Result<(), ::tree_base::NotWellFormed> {
                match self {
                    $($family::$kind(node) => ::tree_base::Completable::check_complete(node, map),)+
                }
            }
        }

        impl ::tree_base::Node for $family {
            const TYPE_NAME: &'static str = stringify!($family);

            fn deep_clone(&self) -> Self {
                match self {
                    $($family::$kind(node) => $family::$kind(::tree_base::Node::deep_clone(node)),)+
                }
            }
        }

        impl $family {
            /// Type tag of the concrete kind held by this node.
            pub fn kind_name(&self) -> &'static str {
                match self {
                    $($family::$kind(_) => <$kind as ::tree_base::Node>::TYPE_NAME,)+
                }
            }
        }
    };
}

pub(crate) use node_family;
