//! Coarse element categories used to bias strategy selection.
//!
//! The category is derived at compile time from the element type through [`Classify`], or supplied
//! by the caller via [`crate::PQueue::with_data_type`]. It never affects correctness: the integer
//! only strategies check for an integer key and fall back to quicksort when there is none.

use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    Integer,
    Float,
    Text,
    /// Growable or borrowed sequences, `Vec<T>`, `&[T]` and the like.
    Sequence,
    /// Fixed size arrays `[T; N]`.
    Array,
    /// Tuples and user defined structs.
    Record,
    Mapping,
    /// Owning or borrowing pointers to a sized value.
    Reference,
    /// Type erased trait objects.
    Interface,
    Channel,
    Function,
    /// Unclassified, also used for containers created without elements.
    Generic,
}

impl DataType {
    /// Human readable name, in the vocabulary of the runtime type categories: text is `"String"`,
    /// sequences are `"Slice"`, records `"Struct"`, mappings `"Map"` and references `"Pointer"`.
    pub fn name(self) -> &'static str {
        match self {
            DataType::Integer => "Integer",
            DataType::Float => "Float",
            DataType::Text => "String",
            DataType::Sequence => "Slice",
            DataType::Array => "Array",
            DataType::Record => "Struct",
            DataType::Mapping => "Map",
            DataType::Reference => "Pointer",
            DataType::Interface => "Interface",
            DataType::Channel => "Channel",
            DataType::Function => "Function",
            DataType::Generic => "Generic",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compile time category of an element type.
///
/// User defined records opt in with a one line impl:
///
/// ```ignore
/// impl Classify for Order {
///     const DATA_TYPE: DataType = DataType::Record;
/// }
/// ```
pub trait Classify {
    const DATA_TYPE: DataType;

    /// The value as a plain integer, used by radix and counting sort. Only meaningful for
    /// [`DataType::Integer`] types, and `None` when the value does not fit an `i128`.
    fn integer_key(&self) -> Option<i128> {
        None
    }
}

macro_rules! classify_integer {
    ($($t:ty),*) => {
        $(
            impl Classify for $t {
                const DATA_TYPE: DataType = DataType::Integer;

                #[inline]
                fn integer_key(&self) -> Option<i128> {
                    i128::try_from(*self).ok()
                }
            }
        )*
    };
}

classify_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! classify_as {
    ($data_type:ident: $($t:ty),*) => {
        $(
            impl Classify for $t {
                const DATA_TYPE: DataType = DataType::$data_type;
            }
        )*
    };
}

classify_as!(Float: f32, f64);
classify_as!(Text: String, &str, Box<str>, Rc<str>, Arc<str>, Cow<'_, str>);
classify_as!(Generic: bool, char, ());
classify_as!(Interface: Box<dyn Any>, Rc<dyn Any>, Arc<dyn Any + Send + Sync>);

impl<T> Classify for Vec<T> {
    const DATA_TYPE: DataType = DataType::Sequence;
}

impl<T> Classify for &[T] {
    const DATA_TYPE: DataType = DataType::Sequence;
}

impl<T> Classify for Box<[T]> {
    const DATA_TYPE: DataType = DataType::Sequence;
}

impl<T> Classify for VecDeque<T> {
    const DATA_TYPE: DataType = DataType::Sequence;
}

impl<T, const N: usize> Classify for [T; N] {
    const DATA_TYPE: DataType = DataType::Array;
}

impl<K, V, S> Classify for HashMap<K, V, S> {
    const DATA_TYPE: DataType = DataType::Mapping;
}

impl<K, V> Classify for BTreeMap<K, V> {
    const DATA_TYPE: DataType = DataType::Mapping;
}

impl<T> Classify for &T {
    const DATA_TYPE: DataType = DataType::Reference;
}

impl<T> Classify for Box<T> {
    const DATA_TYPE: DataType = DataType::Reference;
}

impl<T> Classify for Rc<T> {
    const DATA_TYPE: DataType = DataType::Reference;
}

impl<T> Classify for Arc<T> {
    const DATA_TYPE: DataType = DataType::Reference;
}

impl<T> Classify for Sender<T> {
    const DATA_TYPE: DataType = DataType::Channel;
}

impl<T> Classify for SyncSender<T> {
    const DATA_TYPE: DataType = DataType::Channel;
}

impl<T> Classify for Receiver<T> {
    const DATA_TYPE: DataType = DataType::Channel;
}

macro_rules! classify_tuple {
    ($(($($name:ident),+)),*) => {
        $(
            impl<$($name),+> Classify for ($($name,)+) {
                const DATA_TYPE: DataType = DataType::Record;
            }
        )*
    };
}

classify_tuple!((A), (A, B), (A, B, C), (A, B, C, D), (A, B, C, D, E), (A, B, C, D, E, F));

macro_rules! classify_fn {
    ($(($($arg:ident),*)),*) => {
        $(
            impl<R, $($arg),*> Classify for fn($($arg),*) -> R {
                const DATA_TYPE: DataType = DataType::Function;
            }
        )*
    };
}

classify_fn!((), (A), (A, B), (A, B, C));

/// Category of a container built from `data`: the category of `T`, or [`DataType::Generic`] if
/// there is no element to sample.
pub(crate) fn infer_data_type<T: Classify>(data: &[T]) -> DataType {
    if data.is_empty() {
        DataType::Generic
    } else {
        T::DATA_TYPE
    }
}
