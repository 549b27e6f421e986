/// Static metadata describing an extension contributed to the viewer.
///
/// Descriptors are `'static` so contributions can share them without
/// reference counting; the catalog uses `id` to sweep an extension's
/// contributions back out on removal.
#[derive(Debug)]
pub struct ExtensionDescriptor {
    /// Stable identifier that tracks the extension's contributions.
    pub id: &'static str,
    /// Human readable extension name.
    pub title: &'static str,
    /// Prefix under which the extension's actions are registered.
    pub namespace: &'static str,
}
