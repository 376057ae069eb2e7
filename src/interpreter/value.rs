/// Element-wise and product arithmetic.
///
/// Addition, subtraction, multiplication and transposition, plus the
/// operator trait impls on `&Matrix`.
pub mod arithmetic;
/// The matrix value type.
///
/// Defines `Matrix`, its constructors and accessors, exact element-wise
/// equality and the plain and bracketed text forms.
pub mod core;
/// Elimination routines.
///
/// Row echelon form, reduced row echelon form and the inverse computed
/// alongside it.
pub mod echelon;
