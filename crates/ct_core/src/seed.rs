use crate::model::Contact;
use crate::store::ContactStore;

const SAMPLE_CONTACTS: [(&str, &str); 10] = [
    ("John Smith", "john.smith@email.com"),
    ("Sarah Johnson", "sarah.johnson@email.com"),
    ("Michael Brown", "mbrown@email.com"),
    ("Emily Davis", "emily.davis@email.com"),
    ("David Wilson", "d.wilson@email.com"),
    ("Jessica Martinez", "j.martinez@email.com"),
    ("Christopher Lee", "c.lee@email.com"),
    ("Amanda Taylor", "amanda.t@email.com"),
    ("Ryan Anderson", "ryananderson@email.com"),
    ("Nicole Garcia", "nicole.garcia@email.com"),
];

pub fn sample_contacts() -> Vec<Contact> {
    SAMPLE_CONTACTS
        .iter()
        .map(|(name, email)| Contact::new(*name, *email))
        .collect()
}

pub fn sample_store() -> ContactStore {
    ContactStore::from_contacts(sample_contacts())
}
