// Seekmark state managers
// Managers apply the mutation rules over stored bookmark data.

pub mod bookmark_editor;
