//! Macros for reducing boilerplate when defining records
//!
//! These macros generate the struct and the [`Record`](crate::core::Record)
//! implementation needed for each record shape shown in a list view.

/// Define a record struct with automatic `Record` implementation
///
/// Every listed field is exposed through `Record::field_value` under its
/// own name. Field types must implement
/// [`ToFieldValue`](crate::core::ToFieldValue).
///
/// # Example
///
/// ```rust,ignore
/// use hrms::prelude::*;
///
/// impl_record!(
///     /// A public holiday
///     Holiday,
///     "holiday",
///     "holidays",
///     key: id,
///     search: ["name"],
///     sort: ["name", "date"],
///     {
///         id: u32,
///         name: String,
///         date: NaiveDate,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $(#[$meta:meta])*
        $type:ident,
        $record_type:expr,
        $collection:expr,
        key: $key_field:ident,
        search: [$($search:expr),* $(,)?],
        sort: [$($sortable:expr),* $(,)?],
        {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $field_type:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $type {
            $(
                $(#[$field_meta])*
                pub $field: $field_type,
            )*
        }

        impl $crate::core::Record for $type {
            fn record_type() -> &'static str {
                $record_type
            }

            fn collection_name() -> &'static str {
                $collection
            }

            fn searchable_fields() -> &'static [&'static str] {
                &[$($search),*]
            }

            fn sortable_fields() -> &'static [&'static str] {
                &[$($sortable),*]
            }

            fn key(&self) -> $crate::core::RecordKey {
                $crate::core::RecordKey::from(self.$key_field.clone())
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::FieldValue> {
                match field {
                    $(
                        stringify!($field) => Some(
                            $crate::core::ToFieldValue::to_field_value(&self.$field),
                        ),
                    )*
                    _ => None,
                }
            }
        }
    };
}

/// Define a closed set of string values usable as a record field
///
/// The enum serializes to the given text and exposes it to queries as a
/// `FieldValue::String`, so filters match the text (`"in_progress"`).
///
/// # Example
///
/// ```rust,ignore
/// field_enum!(
///     /// Task priority
///     Priority {
///         High => "high",
///         Medium => "medium",
///         Low => "low",
///     }
/// );
/// ```
#[macro_export]
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $type:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $type {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $type {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($type::$variant => $text,)+
                }
            }
        }

        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::core::ToFieldValue for $type {
            fn to_field_value(&self) -> $crate::core::FieldValue {
                $crate::core::FieldValue::String(self.as_str().to_string())
            }
        }
    };
}
