#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForActivity {
    pub activity: String,
    pub email: String,
}
