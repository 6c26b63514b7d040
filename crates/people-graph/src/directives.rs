use async_graphql::{Context, CustomDirective, Directive, ResolveFut, ServerResult, TypeDirective, Value};

/// Marks a field that reads a stored quantity, naming the unit it is stored in.
#[TypeDirective(name = "baseUnit", location = "FieldDefinition")]
pub fn base_unit(symbol: String) {}

struct UpperDirective;

#[async_trait::async_trait]
impl CustomDirective for UpperDirective {
    async fn resolve_field(&self, _ctx: &Context<'_>, resolve: ResolveFut<'_>) -> ServerResult<Option<Value>> {
        let value = resolve.await?;

        Ok(value.map(|value| match value {
            Value::String(string) => Value::String(string.to_uppercase()),
            value => value,
        }))
    }
}

/// Upper-cases the string value of the field it is applied to. Other values pass through.
#[Directive(location = "Field")]
pub fn upper() -> impl CustomDirective {
    UpperDirective
}
