//! Data models for SunnyBooks

pub mod book;
pub mod copy;
pub mod loan;
pub mod reservation;
pub mod user;

// Re-export commonly used types
pub use book::{AvailabilityStatus, Book, BookDetails, BookWithStatus};
pub use copy::{BookCopy, CopyStatus};
pub use loan::LoanDetails;
pub use reservation::{Reservation, ReservationDetails, ReservationStatus};
pub use user::{User, UserType};
