mod due_date;
mod id;
mod imprint;
mod status;

pub use self::{due_date::*, id::*, imprint::*, status::*};
use crate::entity::{BookId, UserId};
use destructure::{Destructure, Mutation};
use vodca::References;

/// One lendable physical copy of a catalog book.
///
/// `due_back` and `borrower` are only populated while the copy is out on
/// loan; the renewal service is the sole writer of `due_back` after creation.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct BookInstance {
    id: InstanceId,
    book_id: BookId,
    imprint: Imprint,
    status: LoanStatus,
    due_back: Option<DueDate>,
    borrower: Option<UserId>,
}

impl BookInstance {
    pub fn new(
        id: InstanceId,
        book_id: BookId,
        imprint: Imprint,
        status: LoanStatus,
        due_back: Option<DueDate>,
        borrower: Option<UserId>,
    ) -> Self {
        Self {
            id,
            book_id,
            imprint,
            status,
            due_back,
            borrower,
        }
    }
}
