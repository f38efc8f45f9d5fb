use jsonapi_core::adapter::{
    AttributesRead, AttributesWrite, IdentityRead, IdentityWrite, LinksRead,
};
use jsonapi_core::{
    from_resource, read_adapter, to_resource, write_adapter, AdapterResult, Document, Links, Meta,
    RawData, Resource, MEDIA_TYPE,
};
use serde_json::{json, Value};

#[derive(Debug, Default)]
struct Comment {
    id: u32,
    body: String,
}

impl IdentityRead for Comment {
    fn resource_id(&self) -> AdapterResult<String> {
        Ok(self.id.to_string())
    }

    fn resource_type(&self) -> AdapterResult<String> {
        Ok("comments".into())
    }
}

impl AttributesRead for Comment {
    fn attributes(&self) -> AdapterResult<Meta> {
        let mut attrs = Meta::new();
        attrs.insert("body".into(), json!(self.body));
        Ok(attrs)
    }
}

impl LinksRead for Comment {
    fn links(&self) -> AdapterResult<Links> {
        let mut links = Links::new();
        links.add_string("self", format!("http://example.com/comments/{}", self.id));
        Ok(links)
    }
}

impl IdentityWrite for Comment {
    fn set_resource_id(&mut self, id: &str) -> AdapterResult<()> {
        self.id = id.parse()?;
        Ok(())
    }

    fn set_resource_type(&mut self, kind: &str) -> AdapterResult<()> {
        if kind != "comments" {
            return Err(format!("type should equal comments, got {kind}").into());
        }
        Ok(())
    }
}

impl AttributesWrite for Comment {
    fn set_attributes(&mut self, attributes: Option<&Meta>) -> AdapterResult<()> {
        if let Some(body) = attributes.and_then(|a| a.get("body")).and_then(Value::as_str) {
            self.body = body.to_string();
        }
        Ok(())
    }
}

read_adapter!(Comment: identity, attributes, links);
write_adapter!(Comment: identity, attributes);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let comments = [
        Comment {
            id: 5,
            body: "First!".into(),
        },
        Comment {
            id: 12,
            body: "I like XML better".into(),
        },
    ];

    let resources = comments
        .iter()
        .map(|c| to_resource(c, true))
        .collect::<Result<Vec<_>, _>>()?;
    let document = Document {
        data: Some(RawData::encode(&resources)?),
        ..Document::default()
    };
    println!("Content-Type: {MEDIA_TYPE}\n{}", document.to_json_pretty()?);

    // A client posting a new comment has no id to send yet.
    let body = r#"{"data": {"type": "comments", "attributes": {"body": "Welcome"}}}"#;
    let document = Document::from_json(body)?;
    let Some(data) = document.data else {
        return Err("document has no data".into());
    };
    let resource: Resource = data.decode()?;

    let mut created = Comment::default();
    from_resource(&mut created, &resource, true)?;
    println!("Decoded new comment: {created:?}");

    Ok(())
}
