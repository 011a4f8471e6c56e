//! Source templates for one view.
//!
//! Every function renders a complete file. The module dialect comes from
//! [`GeneratorConfig::use_require_syntax`] and is the same for every file of
//! an invocation.

use crate::config::{GeneratorConfig, TestFramework};
use crate::imports::{make_import, test_env_import, Assignee};
use crate::view::ViewSpec;

/// `index.js`: the component registration object for the view.
pub fn index_js(spec: &ViewSpec, config: &GeneratorConfig) -> String {
    let use_require = config.use_require_syntax;
    let name = &spec.name;

    let mut imports = vec![make_import(
        Some(&Assignee::default_binding("template")),
        &format!("./{name}.html"),
        use_require,
    )];
    if !spec.template_only {
        imports.push(make_import(
            Some(&Assignee::default_binding("viewModel")),
            &format!("./{name}"),
            use_require,
        ));
    }
    let imports = imports.join("\n");

    let members = if spec.template_only {
        "template"
    } else {
        "template, viewModel"
    };

    if use_require {
        format!(
            r#"'use strict'

{imports}

module.exports = {{ {members} }}
"#
        )
    } else {
        format!(
            r#"{imports}

export default {{ {members} }}
"#
        )
    }
}

/// `<name>.html`: the view markup. The route is embedded as-is.
pub fn view_html(spec: &ViewSpec) -> String {
    let route = &spec.route;
    format!(
        r#"<section class="view" data-route="{route}">
  <!-- ko if: ready -->
  <h1>{route}</h1>
  <!-- /ko -->
</section>
"#
    )
}

/// `<name>.js`: the view-model class.
pub fn view_js(spec: &ViewSpec, config: &GeneratorConfig) -> String {
    let class_name = spec.class_name();

    let (header, export) = if config.use_require_syntax {
        ("'use strict'\n\n", format!("module.exports = {class_name}"))
    } else {
        ("", format!("export default {class_name}"))
    };

    format!(
        r#"{header}class {class_name} {{
  constructor(params) {{
    this.ready = ko.observable(true)
  }}

  dispose() {{

  }}
}}

{export}
"#
    )
}

/// `<name>.test.js`: a smoke test for the view-model.
pub fn view_test_js(spec: &ViewSpec, config: &GeneratorConfig) -> String {
    let use_require = config.use_require_syntax;
    let name = &spec.name;
    let route = &spec.route;

    let mut imports = Vec::new();
    if let Some(env) = test_env_import(config) {
        imports.push(env);
    }
    imports.push(make_import(
        Some(&Assignee::default_binding("ViewModel")),
        &format!("./{name}"),
        use_require,
    ));
    let imports = imports.join("\n");
    let header = if use_require { "'use strict'\n\n" } else { "" };

    let body = match config.test_framework {
        TestFramework::Mocha => format!(
            r#"describe('{name} view ({route})', () => {{
  it('is ready after construction', () => {{
    const vm = new ViewModel({{}})
    expect(vm.ready()).to.equal(true)
    vm.dispose()
  }})
}})
"#
        ),
        TestFramework::Tape => format!(
            r#"test('{name} view ({route})', (t) => {{
  const vm = new ViewModel({{}})
  t.equal(vm.ready(), true, 'is ready after construction')
  vm.dispose()
  t.end()
}})
"#
        ),
        _ => format!(
            r#"// {name} view ({route})
const vm = new ViewModel({{}})
if (vm.ready() !== true) {{
  throw new Error('{name} view is not ready after construction')
}}
vm.dispose()
"#
        ),
    };

    format!("{header}{imports}\n\n{body}")
}
