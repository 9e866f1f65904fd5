//! The local message table of a document being decoded.

use super::file::DefinitionId;

/// Number of local message numbers addressable by a record header.
pub const LOCAL_MESSAGES: usize = 16;

/// Maps local message numbers to the definition most recently declared for
/// each.
#[derive(Debug, Default, Clone)]
pub struct LocalRegistry([Option<DefinitionId>; LOCAL_MESSAGES]);

impl LocalRegistry {
    /// Bind a local message number to a definition, replacing any earlier
    /// binding. Returns the replaced definition.
    pub fn define(&mut self, local_message: u8, id: DefinitionId) -> Option<DefinitionId> {
        self.0[local_message as usize % LOCAL_MESSAGES].replace(id)
    }

    pub fn resolve(&self, local_message: u8) -> Option<DefinitionId> {
        self.0[local_message as usize % LOCAL_MESSAGES]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redefinition_replaces() {
        let mut registry = LocalRegistry::default();
        assert_eq!(registry.resolve(3), None);

        assert_eq!(registry.define(3, DefinitionId(0)), None);
        assert_eq!(registry.define(3, DefinitionId(1)), Some(DefinitionId(0)));
        assert_eq!(registry.resolve(3), Some(DefinitionId(1)));
        assert_eq!(registry.resolve(4), None);
    }
}
