/// How cell content that does not fit its width is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WrapMode {
    /// Content is trimmed at the cell edge.
    #[default]
    None,
    /// Content is wrapped at word boundaries.
    Word,
}
