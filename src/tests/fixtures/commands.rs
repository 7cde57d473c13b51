// Commands against "Chess Club", the activity used throughout the tests.

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub fn make_sign_up_command(email: &str) -> SignUpForActivity {
    SignUpForActivity {
        activity: "Chess Club".into(),
        email: email.into(),
    }
}

pub fn make_unregister_command(email: &str) -> UnregisterFromActivity {
    UnregisterFromActivity {
        activity: "Chess Club".into(),
        email: email.into(),
    }
}
