use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Id handed out when the store is empty.
pub const FIRST_ID: u32 = 1001;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub course: String,
    pub email: String,
    pub gpa: f64,
    pub marks: u32,
}

#[derive(Deserialize)]
pub struct NewStudent {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    pub age: u32,
    pub course: String,
    pub email: String,
    pub gpa: f64,
    #[serde(default)]
    pub marks: u32,
}

/// Any `id` in the body is ignored; the path decides which student changes.
#[derive(Deserialize)]
pub struct UpdateStudent {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub course: Option<String>,
    pub email: Option<String>,
    pub gpa: Option<f64>,
    pub marks: Option<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Created {
    pub id: u32,
    pub name: String,
}

/// `{status, message, data}`; every response, including failures, is sent
/// with HTTP 200 and this body.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    fn success(message: &str, data: Option<T>) -> Json<Self> {
        Json(Self {
            status: "success".to_string(),
            message: message.to_string(),
            data,
        })
    }

    fn error(message: &str) -> Json<Self> {
        Json(Self {
            status: "error".to_string(),
            message: message.to_string(),
            data: None,
        })
    }
}

pub type Db = Arc<RwLock<BTreeMap<u32, Student>>>;

pub fn app() -> Router {
    app_with_students(Vec::new())
}

/// Router over a store pre-populated with `students`.
pub fn app_with_students(students: impl IntoIterator<Item = Student>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        students.into_iter().map(|s| (s.id, s)).collect(),
    ));
    Router::new()
        .route("/api/students", get(list_students).post(create_student))
        .route(
            "/api/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .fallback(invalid_endpoint)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn next_id(students: &BTreeMap<u32, Student>) -> u32 {
    students.keys().next_back().map_or(FIRST_ID, |max| max + 1)
}

async fn list_students(State(db): State<Db>) -> Json<Envelope<Vec<Student>>> {
    let students = db.read().await;
    Envelope::success("Students retrieved", Some(students.values().cloned().collect()))
}

async fn create_student(
    State(db): State<Db>,
    Json(input): Json<NewStudent>,
) -> Json<Envelope<Created>> {
    let mut students = db.write().await;
    let id = match input.id {
        Some(id) if id != 0 => {
            if students.contains_key(&id) {
                return Envelope::error("Student ID already exists");
            }
            id
        }
        _ => next_id(&students),
    };
    let student = Student {
        id,
        name: input.name,
        age: input.age,
        course: input.course,
        email: input.email,
        gpa: input.gpa,
        marks: input.marks,
    };
    let created = Created {
        id,
        name: student.name.clone(),
    };
    students.insert(id, student);
    info!(id, "student added");
    Envelope::success("Student added successfully", Some(created))
}

async fn get_student(State(db): State<Db>, Path(id): Path<u32>) -> Json<Envelope<Student>> {
    let students = db.read().await;
    match students.get(&id) {
        Some(student) => Envelope::success("Student found", Some(student.clone())),
        None => Envelope::error("Student not found"),
    }
}

async fn update_student(
    State(db): State<Db>,
    Path(id): Path<u32>,
    Json(input): Json<UpdateStudent>,
) -> Json<Envelope<()>> {
    let mut students = db.write().await;
    let Some(student) = students.get_mut(&id) else {
        return Envelope::error("Student not found");
    };
    if let Some(name) = input.name {
        student.name = name;
    }
    if let Some(age) = input.age {
        student.age = age;
    }
    if let Some(course) = input.course {
        student.course = course;
    }
    if let Some(email) = input.email {
        student.email = email;
    }
    if let Some(gpa) = input.gpa {
        student.gpa = gpa;
    }
    if let Some(marks) = input.marks {
        student.marks = marks;
    }
    info!(id, "student updated");
    Envelope::success("Student updated successfully", None)
}

async fn delete_student(State(db): State<Db>, Path(id): Path<u32>) -> Json<Envelope<()>> {
    let mut students = db.write().await;
    match students.remove(&id) {
        Some(_) => {
            info!(id, "student deleted");
            Envelope::success("Student deleted successfully", None)
        }
        None => Envelope::error("Student not found"),
    }
}

async fn invalid_endpoint() -> Json<Envelope<()>> {
    Envelope::error("Invalid endpoint")
}
