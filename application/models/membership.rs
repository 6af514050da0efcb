/// One page of a user's group memberships.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MembershipPage {
    pub group_ids: Vec<String>,
    pub next_token: Option<String>,
}
