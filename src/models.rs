use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilm {
    pub title: String,
    pub year: i32,
    pub director_id: Option<i32>,
}

/// Partial update; `director_id` is not assignable through PUT.
#[derive(Debug, Deserialize)]
pub struct UpdateFilm {
    pub title: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDirector {
    pub name: String,
    pub birth_year: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDirector {
    pub name: Option<String>,
    pub birth_year: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct CreateActor {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateActor {
    pub name: Option<String>,
}
