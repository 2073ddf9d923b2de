//! MiniJinja filter registration.

use minijinja::value::Kwargs;
use minijinja::{Environment, Error, ErrorKind};

use crate::bem::{ClassNamer, ModifierSet};
use crate::style::NamingError;

fn naming_error(err: NamingError) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string())
}

/// Registers the `class` filter on a minijinja environment.
///
/// The filter resolves BEM class strings from the given namer:
///
/// ```jinja
/// <button class="{{ "btn" | class }}">                    {# block #}
/// <button class="{{ "btn" | class(primary=true) }}">      {# modifiers #}
/// <span class="{{ "btn" | class("icon") }}">              {# element #}
/// <span class="{{ "btn" | class("icon", small=true) }}">  {# element + modifiers #}
/// ```
///
/// Keyword arguments become modifier flags, applied in keyword order. A
/// missing block, element, or active-modifier class fails the render with an
/// invalid-operation error carrying the offending key.
pub fn register_class_filters(env: &mut Environment<'static>, namer: ClassNamer) {
    env.add_filter(
        "class",
        move |block: String, element: Option<String>, kwargs: Kwargs| -> Result<String, Error> {
            let resolver = namer.get(&block).ok_or_else(|| {
                naming_error(NamingError::MissingStyleKey { key: block.clone() })
            })?;

            let mut modifiers = ModifierSet::new();
            for name in kwargs.args() {
                modifiers = modifiers.set(name, kwargs.get::<bool>(name)?);
            }
            kwargs.assert_all_used()?;

            match element {
                Some(name) => resolver
                    .element_with(&name, &modifiers)
                    .map_err(naming_error),
                None if modifiers.is_empty() => Ok(resolver.class().to_string()),
                None => resolver.with(&modifiers).map_err(naming_error),
            }
        },
    );
}
