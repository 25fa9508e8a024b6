pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the element id [{id}] is already in use")]
    DuplicateElementId { id: String },

    #[error("the relationship id [{id}] is already in use")]
    DuplicateRelationshipId { id: String },

    #[error("the view key [{key}] is already in use")]
    DuplicateViewKey { key: String },

    #[error("the element [{id}] references an unknown element [{reference}]")]
    UnknownElement { id: String, reference: String },

    #[error("the element [{id}]'s parent [{parent}] is not a deployment node")]
    NotADeploymentNode { id: String, parent: String },
}
