pub mod app;
pub mod camera;

pub use app::App;
pub use camera::Camera;
