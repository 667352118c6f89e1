/// How rehydration writes a chunk's module fragments back into the hole.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ModuleContainer {
  /// Fragments back to back, for templates that already provide their own container.
  #[default]
  Concatenated,
  /// `{id:fragment,...}`, the shape of a webpack-style module factory table.
  ObjectLiteral,
  /// A sparse array indexed by id when all ids are numbers and that is shorter, otherwise
  /// an object literal.
  Auto,
}
