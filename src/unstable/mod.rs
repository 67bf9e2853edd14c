// Selection sort swaps the minimum into place, which does not preserve the order of equal
// elements.
pub mod selection;
