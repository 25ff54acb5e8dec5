//! JSX node helpers.
//!
//! Small lookups over oxc JSX nodes that the rule harness composes: element
//! names, attribute access, and literal / enum-reference value resolution.

use oxc_ast::ast::{
    Expression, JSXAttribute, JSXAttributeItem, JSXAttributeName, JSXAttributeValue, JSXElement,
    JSXElementName, JSXOpeningElement,
};
use oxc_span::Span;

/// The identifier text and span of an element name, when the name is a plain
/// identifier. Member expressions (`<Foo.Bar>`), namespaced names, and `this`
/// do not bind a single local and return `None`.
pub fn element_name<'a>(name: &'a JSXElementName<'a>) -> Option<(&'a str, Span)> {
    match name {
        JSXElementName::Identifier(ident) => Some((ident.name.as_str(), ident.span)),
        JSXElementName::IdentifierReference(ident) => Some((ident.name.as_str(), ident.span)),
        _ => None,
    }
}

/// The identifier name of an opening element, if it is a plain identifier.
#[inline]
pub fn opening_name<'a>(element: &'a JSXElement<'_>) -> Option<(&'a str, Span)> {
    element_name(&element.opening_element.name)
}

/// The name span of a closing element, if present and a plain identifier.
#[inline]
pub fn closing_name_span(element: &JSXElement<'_>) -> Option<Span> {
    element
        .closing_element
        .as_ref()
        .and_then(|closing| element_name(&closing.name).map(|(_, span)| span))
}

/// Find an attribute by name on an opening element. Spread attributes and
/// namespaced attribute names are skipped.
pub fn get_attribute<'a, 'b>(
    opening: &'a JSXOpeningElement<'b>,
    name: &str,
) -> Option<&'a JSXAttribute<'b>> {
    opening.attributes.iter().find_map(|item| match item {
        JSXAttributeItem::Attribute(attr) => match &attr.name {
            JSXAttributeName::Identifier(ident) if ident.name == name => Some(attr.as_ref()),
            _ => None,
        },
        JSXAttributeItem::SpreadAttribute(_) => None,
    })
}

/// Resolve an attribute value to a string, for `prop="value"` and
/// `prop={"value"}` forms. Anything else returns `None`.
pub fn attribute_string_value<'a>(attr: &'a JSXAttribute<'_>) -> Option<&'a str> {
    match attr.value.as_ref()? {
        JSXAttributeValue::StringLiteral(lit) => Some(lit.value.as_str()),
        JSXAttributeValue::ExpressionContainer(container) => {
            match container.expression.as_expression()? {
                Expression::StringLiteral(lit) => Some(lit.value.as_str()),
                _ => None,
            }
        }
        _ => None,
    }
}

/// The expression inside an attribute's `{...}` container, if any.
pub fn attribute_expression<'a, 'b>(attr: &'a JSXAttribute<'b>) -> Option<&'a Expression<'b>> {
    match attr.value.as_ref()? {
        JSXAttributeValue::ExpressionContainer(container) => container.expression.as_expression(),
        _ => None,
    }
}

/// Whether an attribute expression is a reference to `object.member`, for
/// enum-style values such as `PageSectionTypes.nav`. `object` is the local
/// name the enum object is bound to in this file.
pub fn is_enum_member(expr: &Expression<'_>, object: &str, member: &str) -> bool {
    let Expression::StaticMemberExpression(access) = expr else {
        return false;
    };
    if access.property.name != member {
        return false;
    }
    matches!(&access.object, Expression::Identifier(ident) if ident.name == object)
}
