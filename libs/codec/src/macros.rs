//! Segment Definition Macro
//!
//! Provides the `define_segment!` macro for declaring a segment type: a static
//! layout table plus a newtype over `Segment` with typed pass-through
//! accessors for every field.
//!
//! ## Usage Example
//!
//! ```rust
//! use codec::define_segment;
//! use codec::types::TableId;
//!
//! define_segment! {
//!     /// Notes and comments
//!     Nte, NTE_LAYOUT = "NTE", "Notes and Comments" {
//!         1 => set_id: Si(4, "Set ID - NTE");
//!         2 => source_of_comment: Id(8, "Source of Comment").table(TableId(105));
//!         3 => comment: Ft(65536, "Comment").unbounded();
//!     }
//! }
//! ```
//!
//! Each field `n => name: Type(len, "Label")` generates:
//! - `name(rep)`: repetition `rep`, checked against the declared datatype
//! - `name_all()`: every present repetition
//! - `name_count()`: number of present repetitions
//!
//! Descriptor modifiers (`.required()`, `.repeating(n)`, `.unbounded()`,
//! `.table(id)`) chain onto the field declaration exactly as on
//! `FieldDescriptor`.

/// Declare a segment layout and its typed wrapper
#[macro_export]
macro_rules! define_segment {
    (
        $(#[$meta:meta])*
        $wrapper:ident, $layout:ident = $id:literal, $description:literal {
            $(
                $slot:literal => $accessor:ident : $datatype:ident ( $len:expr, $name:literal )
                    $( . $modifier:ident ( $( $arg:expr ),* ) )* ;
            )*
        }
    ) => {
        #[doc = concat!("Field layout of the ", $id, " segment")]
        pub static $layout: $crate::types::SegmentLayout = $crate::types::SegmentLayout::new(
            $id,
            $description,
            &[
                $(
                    $crate::types::FieldDescriptor::new(
                        $slot,
                        $crate::types::DatatypeId::$datatype,
                        $len,
                        $name,
                    ) $( . $modifier ( $( $arg ),* ) )*,
                )*
            ],
        );

        $(#[$meta])*
        #[derive(Debug)]
        pub struct $wrapper($crate::Segment);

        impl $wrapper {
            pub const ID: &'static str = $id;

            pub fn new(
                context: ::std::sync::Arc<$crate::MessageContext>,
                instantiator: ::std::sync::Arc<dyn $crate::DatatypeInstantiator>,
            ) -> Self {
                Self($crate::Segment::new(&$layout, context, instantiator))
            }

            pub fn layout() -> &'static $crate::types::SegmentLayout {
                &$layout
            }

            /// Wrap a generic segment built from this type's layout
            pub fn from_segment(segment: $crate::Segment) -> ::std::option::Option<Self> {
                (segment.layout().id == $id).then(|| Self(segment))
            }

            pub fn segment(&self) -> &$crate::Segment {
                &self.0
            }

            pub fn segment_mut(&mut self) -> &mut $crate::Segment {
                &mut self.0
            }

            pub fn into_segment(self) -> $crate::Segment {
                self.0
            }

            $(
                $crate::paste::paste! {
                    #[doc = concat!($id, "-", stringify!($slot), ": ", $name)]
                    pub fn $accessor(
                        &self,
                        repetition: usize,
                    ) -> $crate::SegmentResult<&dyn $crate::FieldValue> {
                        self.0.get_typed($slot, repetition, $crate::types::DatatypeId::$datatype)
                    }

                    #[doc = concat!("All repetitions of ", $id, "-", stringify!($slot))]
                    pub fn [<$accessor _all>](
                        &self,
                    ) -> $crate::SegmentResult<::std::vec::Vec<&dyn $crate::FieldValue>> {
                        self.0.get_all_typed($slot, $crate::types::DatatypeId::$datatype)
                    }

                    #[doc = concat!("Repetition count of ", $id, "-", stringify!($slot))]
                    pub fn [<$accessor _count>](&self) -> $crate::SegmentResult<usize> {
                        self.0.repetition_count($slot)
                    }
                }
            )*
        }

        impl ::std::ops::Deref for $wrapper {
            type Target = $crate::Segment;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for $wrapper {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl ::std::convert::From<$wrapper> for $crate::Segment {
            fn from(wrapper: $wrapper) -> Self {
                wrapper.0
            }
        }
    };
}
