use serde::Deserialize;

// Query parameters for the profile page. All optional: the page renders
// whatever it is given and leaves absent values blank.
#[derive(Debug, Deserialize)]
pub struct ProfileParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}
