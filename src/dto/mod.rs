// Request and response shapes shared between routes and services

pub mod admin;
pub mod forms;
pub mod user;

pub use forms::{
    Credentials, ExerciseForm, LoginForm, NewExercise, NewProgress, NewUser, NewWellness,
    ProfileForm, ProfileUpdate, ProgressForm, RegisterForm, WellnessForm,
};
pub use user::{AuthResponse, LoggedResponse, UserResponse};
