// crates/infra/src/plist_store/convert.rs
//! Mapping between `plist` values and the domain model.

use plist_version_domain::{Document, Integer, Value};
use plist_version_shared_kernel::{InfraResult, InfrastructureError};

pub fn document_from_plist(dict: plist::Dictionary) -> InfraResult<Document> {
    dict.into_iter()
        .map(|(key, value)| Ok((key, value_from_plist(value)?)))
        .collect()
}

pub fn document_to_plist(doc: &Document) -> plist::Dictionary {
    let mut dict = plist::Dictionary::new();
    for (key, value) in doc.iter() {
        dict.insert(key.to_owned(), value_to_plist(value));
    }
    dict
}

pub fn value_from_plist(value: plist::Value) -> InfraResult<Value> {
    let converted = match value {
        plist::Value::String(s) => Value::String(s),
        plist::Value::Integer(i) => Value::Integer(integer_from_plist(i)?),
        plist::Value::Real(r) => Value::Real(r),
        plist::Value::Boolean(b) => Value::Boolean(b),
        plist::Value::Date(d) => Value::Date(d.into()),
        plist::Value::Data(bytes) => Value::Data(bytes),
        plist::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(value_from_plist)
                .collect::<InfraResult<_>>()?,
        ),
        plist::Value::Dictionary(dict) => Value::Dictionary(document_from_plist(dict)?),
        plist::Value::Uid(uid) => Value::Uid(uid.get()),
        other => {
            return Err(InfrastructureError::UnsupportedValue { kind: format!("{other:?}") });
        }
    };
    Ok(converted)
}

pub fn value_to_plist(value: &Value) -> plist::Value {
    match value {
        Value::String(s) => plist::Value::String(s.clone()),
        Value::Integer(Integer::Signed(i)) => plist::Value::Integer((*i).into()),
        Value::Integer(Integer::Unsigned(u)) => plist::Value::Integer((*u).into()),
        Value::Real(r) => plist::Value::Real(*r),
        Value::Boolean(b) => plist::Value::Boolean(*b),
        Value::Date(d) => plist::Value::Date((*d).into()),
        Value::Data(bytes) => plist::Value::Data(bytes.clone()),
        Value::Array(items) => plist::Value::Array(items.iter().map(value_to_plist).collect()),
        Value::Dictionary(doc) => plist::Value::Dictionary(document_to_plist(doc)),
        Value::Uid(uid) => plist::Value::Uid(plist::Uid::new(*uid)),
    }
}

fn integer_from_plist(i: plist::Integer) -> InfraResult<Integer> {
    i.as_signed()
        .map(Integer::Signed)
        .or_else(|| i.as_unsigned().map(Integer::Unsigned))
        .ok_or_else(|| InfrastructureError::UnsupportedValue { kind: format!("integer {i}") })
}
