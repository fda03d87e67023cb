//! Sea-ORM entities of the training registry.
//!
//! Each module holds the table model, its request models and its router.

pub mod person;
pub mod user;
pub mod rol;
pub mod form;
pub mod module;
pub mod regional;
pub mod enterprise;
pub mod instructor;
pub mod aprendiz;
pub mod program;
pub mod process;
pub mod user_rol;
pub mod rol_form;
pub mod form_module;
pub mod aprendiz_program;
pub mod instructor_program;

pub use person::Person;
pub use user::User;
pub use rol::Rol;
pub use form::Form;
pub use module::Module;
pub use regional::Regional;
pub use enterprise::Enterprise;
pub use instructor::Instructor;
pub use aprendiz::Aprendiz;
pub use program::Program;
pub use process::Process;
pub use user_rol::UserRol;
pub use rol_form::RolForm;
pub use form_module::FormModule;
pub use aprendiz_program::AprendizProgram;
pub use instructor_program::InstructorProgram;
