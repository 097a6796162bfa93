///
/// Active business identity supplied by the profile service.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusinessProfile {
    pub client_id: String,
    /// Business types that take orders at a counter require
    /// full-attention acknowledgement of new orders/enquiries
    pub requires_blocking_popups: bool,
}
