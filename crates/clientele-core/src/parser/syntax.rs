//! Command words, argument prefixes and usage messages

use std::fmt;

/// An argument marker such as `n/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// Person
pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_BIRTHDAY: Prefix = Prefix::new("b/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_PREMIUM: Prefix = Prefix::new("pr/");

// Policy
pub const PREFIX_POLICY_NUMBER: Prefix = Prefix::new("pn/");
pub const PREFIX_POLICY_NAME: Prefix = Prefix::new("pname/");
pub const PREFIX_PROVIDER_COMPANY: Prefix = Prefix::new("pc/");
pub const PREFIX_POLICY_LINK: Prefix = Prefix::new("pl/");

// Task
pub const PREFIX_BY: Prefix = Prefix::new("by/");
pub const PREFIX_FROM: Prefix = Prefix::new("from/");
pub const PREFIX_TO: Prefix = Prefix::new("to/");
pub const PREFIX_DESCRIPTION: Prefix = Prefix::new("d/");

pub const USAGE_ADD: &str = "add: Adds a person to the address book. Parameters: \
n/NAME p/PHONE e/EMAIL a/ADDRESS b/BIRTHDAY [t/TAG]... [pr/POLICY_NAME AMOUNT]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 \
b/1990-01-01 t/friends pr/LifeShield 300";

pub const USAGE_EDIT: &str = "edit: Edits the details of the person identified by the index \
number used in the displayed person list. Existing values will be overwritten by the input \
values.\nParameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] \
[a/ADDRESS] [b/BIRTHDAY] [t/TAG]... [pr/POLICY_NAME AMOUNT]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

pub const USAGE_DELETE: &str = "delete: Deletes the person identified by the index number \
used in the displayed person list.\nParameters: INDEX (must be a positive integer)\n\
Example: delete 1";

pub const USAGE_CLEAR: &str = "clear: Clears all persons from the address book.";

pub const USAGE_FIND: &str = "find: Finds all persons whose names contain any of the \
specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\nExample: find alice bob charlie";

pub const USAGE_LIST: &str = "list: Lists all persons.";

pub const USAGE_ADD_POLICY: &str = "addpolicy: Adds a policy to the policy book. Parameters: \
pn/POLICY_NUMBER pname/POLICY_NAME pc/PROVIDER_COMPANY pl/POLICY_LINK\n\
Example: addpolicy pn/POL123 pname/LifeShield pc/ShieldCorp \
pl/https://www.shieldcorp.com/policy123";

pub const USAGE_EDIT_POLICY: &str = "editpolicy: Edits the details of the policy identified \
by the index number used in the displayed policy list.\nParameters: INDEX (must be a positive \
integer) [pn/POLICY_NUMBER] [pname/POLICY_NAME] [pc/PROVIDER_COMPANY] [pl/POLICY_LINK]\n\
Example: editpolicy 1 pname/LifeShield Plus";

pub const USAGE_DELETE_POLICY: &str = "deletepolicy: Deletes the policy identified by the \
index number used in the displayed policy list.\nParameters: INDEX (must be a positive \
integer)\nExample: deletepolicy 1";

pub const USAGE_CLEAR_POLICY: &str = "clearpolicy: Clears all policies from the policy book.";

pub const USAGE_FIND_POLICY: &str = "findpolicy: Finds all policies whose number, name or \
provider contains any of the specified keywords (case-insensitive).\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\nExample: findpolicy shield";

pub const USAGE_LIST_POLICY: &str = "listpolicy: Lists all policies.";

pub const USAGE_TODO: &str = "todo: Adds a todo to the task list.\n\
Parameters: DESCRIPTION\nExample: todo call Amy";

pub const USAGE_DEADLINE: &str = "deadline: Adds a deadline to the task list.\n\
Parameters: DESCRIPTION by/DATE_TIME\nExample: deadline renew policy by/2024-10-14 18:00";

pub const USAGE_EVENT: &str = "event: Adds an event to the task list.\n\
Parameters: DESCRIPTION from/DATE_TIME to/DATE_TIME\n\
Example: event client meeting from/2024-10-14 09:00 to/2024-10-14 10:00";

pub const USAGE_EDIT_TASK: &str = "edittask: Edits the task identified by the index number \
used in the displayed task list.\nParameters: INDEX (must be a positive integer) \
[d/DESCRIPTION] [by/DATE_TIME] [from/DATE_TIME] [to/DATE_TIME]\n\
Example: edittask 2 by/2024-10-15 12:00";

pub const USAGE_MARK: &str = "mark: Marks the task identified by the index number as done.\n\
Parameters: INDEX (must be a positive integer)\nExample: mark 1";

pub const USAGE_UNMARK: &str = "unmark: Marks the task identified by the index number as not \
done.\nParameters: INDEX (must be a positive integer)\nExample: unmark 1";

pub const USAGE_DELETE_TASK: &str = "deletetask: Deletes the task identified by the index \
number used in the displayed task list.\nParameters: INDEX (must be a positive integer)\n\
Example: deletetask 1";

pub const USAGE_CLEAR_TASK: &str = "cleartask: Clears all tasks from the task list.";

pub const USAGE_FIND_TASK: &str = "findtask: Finds all tasks whose description contains any \
of the specified keywords (case-insensitive).\nParameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: findtask renew";

pub const USAGE_LIST_TASK: &str = "listtask: Lists all tasks.";

pub const USAGE_SCHEDULE: &str = "schedule: Lists the tasks falling on a date.\n\
Parameters: DATE (yyyy-MM-dd)\nExample: schedule 2024-10-14";

pub const USAGE_HELP: &str = "help: Shows program usage instructions.\nExample: help";

pub const USAGE_EXIT: &str = "exit: Exits Clientele.";
