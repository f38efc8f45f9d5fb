// Blog fixtures shared by the integration tests.
#![allow(dead_code)]

use jsonapi_core::adapter::{
    AttributesRead, AttributesWrite, IdentityRead, IdentityWrite, LinksRead, MetaRead,
    RelationshipsRead, RelationshipsWrite,
};
use jsonapi_core::{
    from_resource, read_adapter, to_resource, write_adapter, AdapterResult, Links, Meta, RawData,
    Relationship, Relationships, Resource,
};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("test error")]
pub struct TestError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub body: String,
    pub author: Option<Person>,
}

pub const ARTICLE_JSON: &str = r#"
{
    "id": "1",
    "type": "articles",
    "attributes": {
        "title": "JSON API paints my bikeshed!",
        "body": "The shortest article. Ever."
    },
    "relationships": {
        "author": {
            "data": {
                "id": "42",
                "type": "people"
            },
            "links": {
                "self": "http://example.com/articles/1/relationships/author",
                "related": "http://example.com/articles/1/author"
            }
        }
    },
    "links": {
        "self": "http://example.com/articles/1"
    },
    "meta": {
        "total": 42,
        "type": "foo"
    }
}
"#;

pub fn test_person() -> Person {
    Person {
        id: 42,
        ..Person::default()
    }
}

pub fn test_article() -> Article {
    Article {
        id: 1,
        title: "JSON API paints my bikeshed!".into(),
        body: "The shortest article. Ever.".into(),
        author: Some(test_person()),
    }
}

pub const TEST_HREF: &str = "http://test.com";

pub fn test_meta() -> Meta {
    match json!({ "test": "foo" }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

fn parse_id(id: &str) -> AdapterResult<u32> {
    Ok(id.parse()?)
}

fn expect_type(kind: &str, expected: &str) -> AdapterResult<()> {
    if kind != expected {
        return Err(format!("type should equal {expected}").into());
    }
    Ok(())
}

// person

impl IdentityRead for Person {
    fn resource_id(&self) -> AdapterResult<String> {
        Ok(self.id.to_string())
    }

    fn resource_type(&self) -> AdapterResult<String> {
        Ok("people".into())
    }
}

impl AttributesRead for Person {
    fn attributes(&self) -> AdapterResult<Meta> {
        let mut attrs = Meta::new();
        attrs.insert("name".into(), json!(self.name));
        attrs.insert("age".into(), json!(self.age));
        Ok(attrs)
    }
}

impl IdentityWrite for Person {
    fn set_resource_id(&mut self, id: &str) -> AdapterResult<()> {
        self.id = parse_id(id)?;
        Ok(())
    }

    fn set_resource_type(&mut self, kind: &str) -> AdapterResult<()> {
        expect_type(kind, "people")
    }
}

impl AttributesWrite for Person {
    fn set_attributes(&mut self, attributes: Option<&Meta>) -> AdapterResult<()> {
        let Some(attrs) = attributes else {
            return Ok(());
        };
        if let Some(name) = attrs.get("name").and_then(Value::as_str) {
            self.name = name.to_string();
        }
        if let Some(age) = attrs.get("age").and_then(Value::as_u64) {
            self.age = u32::try_from(age)?;
        }
        Ok(())
    }
}

read_adapter!(Person: identity, attributes);
write_adapter!(Person: identity, attributes);

// article

impl Article {
    fn url(&self) -> String {
        format!("http://example.com/articles/{}", self.id)
    }
}

impl IdentityRead for Article {
    fn resource_id(&self) -> AdapterResult<String> {
        Ok(self.id.to_string())
    }

    fn resource_type(&self) -> AdapterResult<String> {
        Ok("articles".into())
    }
}

impl AttributesRead for Article {
    fn attributes(&self) -> AdapterResult<Meta> {
        let mut attrs = Meta::new();
        attrs.insert("title".into(), json!(self.title));
        attrs.insert("body".into(), json!(self.body));
        Ok(attrs)
    }
}

impl RelationshipsRead for Article {
    fn relationships(&self) -> AdapterResult<Relationships> {
        let mut rels = Relationships::new();
        let Some(author) = &self.author else {
            return Ok(rels);
        };

        let identifier = to_resource(author, false)?;
        let mut links = Links::new();
        links.add_string("self", format!("{}/relationships/author", self.url()));
        links.add_string("related", format!("{}/author", self.url()));
        rels.add(
            "author",
            Relationship {
                links,
                data: Some(RawData::encode(&identifier)?),
                meta: None,
            },
        );
        Ok(rels)
    }
}

impl LinksRead for Article {
    fn links(&self) -> AdapterResult<Links> {
        let mut links = Links::new();
        links.add_string("self", self.url());
        Ok(links)
    }
}

impl MetaRead for Article {
    fn meta(&self) -> AdapterResult<Meta> {
        let mut meta = Meta::new();
        meta.insert("total".into(), json!(42));
        meta.insert("type".into(), json!("foo"));
        Ok(meta)
    }
}

impl IdentityWrite for Article {
    fn set_resource_id(&mut self, id: &str) -> AdapterResult<()> {
        self.id = parse_id(id)?;
        Ok(())
    }

    fn set_resource_type(&mut self, kind: &str) -> AdapterResult<()> {
        expect_type(kind, "articles")
    }
}

impl AttributesWrite for Article {
    fn set_attributes(&mut self, attributes: Option<&Meta>) -> AdapterResult<()> {
        let Some(attrs) = attributes else {
            return Ok(());
        };
        if let Some(title) = attrs.get("title").and_then(Value::as_str) {
            self.title = title.to_string();
        }
        if let Some(body) = attrs.get("body").and_then(Value::as_str) {
            self.body = body.to_string();
        }
        Ok(())
    }
}

impl RelationshipsWrite for Article {
    fn set_relationships(&mut self, relationships: &Relationships) -> AdapterResult<()> {
        let Some(data) = relationships.get("author").and_then(|rel| rel.data.as_ref()) else {
            return Ok(());
        };
        self.author = match data.decode::<Option<Resource>>()? {
            Some(identifier) => {
                let mut person = Person::default();
                from_resource(&mut person, &identifier, false)?;
                Some(person)
            }
            None => None,
        };
        Ok(())
    }
}

read_adapter!(Article: identity, attributes, relationships, links, meta);
write_adapter!(Article: identity, attributes, relationships);
