use std::fmt::Display;

/// Type tag stored with every symbol. Nothing is inferred during recognition,
/// so freshly inserted names are always `Dynamic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    #[default]
    Dynamic,
    Boolean,
    Float,
    Integer,
    String,
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Dynamic => write!(f, "dynamic"),
            DataType::Boolean => write!(f, "bool"),
            DataType::Float => write!(f, "float"),
            DataType::Integer => write!(f, "int"),
            DataType::String => write!(f, "str"),
        }
    }
}
