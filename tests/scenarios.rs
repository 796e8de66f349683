//! End-to-end indexing scenarios over small resolved packages.

mod support;

use relindex::element::{Element, ParameterKind};
use relindex::nodes::{
    Block, ClassDeclaration, ClassMember, Combinator, CompilationUnitMember,
    ConstructorDeclaration, ConstructorInitializer, DefaultFormalParameter, Directive, Expression,
    ExtendsClause, FormalParameter, FormalParameterList, FunctionBody, FunctionDeclaration,
    ImportDirective, MethodDeclaration, RedirectingConstructorInvocation, SimpleFormalParameter,
    Statement, StringLiteral, VariableDeclaration, VariableDeclarationList,
};
use relindex::{
    CompilationUnit, ElementId, ElementKind, ElementModel, IndexOptions, RelationKind,
};

use support::{flatten, index, Source};

fn import(src: &Source, nth: usize, uri: &str, unit: ElementId, element: ElementId) -> Directive {
    let keyword = src.token("import", nth);
    let uri_offset = keyword.end() + 1;
    let semicolon = relindex::nodes::Token::new(";", uri_offset + uri.len() as u32);
    Directive::Import(ImportDirective {
        keyword,
        uri: StringLiteral::new(uri, uri_offset),
        uri_element: Some(unit),
        element: Some(element),
        prefix: None,
        combinators: Vec::new(),
        semicolon,
    })
}

#[test]
fn extends_and_constructor_call() {
    let src = Source::new("class A {} class B extends A { foo() => new A(); }");
    let mut model = ElementModel::new();
    let (_, unit) = model.add_library("package:app/main.dart");
    let a = model.add_child(unit, ElementKind::Class, "A", src.at("A", 0));
    let a_ctor = model.add(
        Element::new(ElementKind::Constructor, "", src.at("A", 0))
            .with_enclosing(a)
            .synthetic(),
    );
    let b = model.add_child(unit, ElementKind::Class, "B", src.at("B", 0));
    let foo = model.add_child(b, ElementKind::Method, "foo", src.at("foo", 0));

    let class_a = ClassDeclaration::new(src.token("class", 0), src.ident("A", 0, Some(a)));
    let mut class_b = ClassDeclaration::new(src.token("class", 1), src.ident("B", 0, Some(b)));
    class_b.extends_clause = Some(ExtendsClause {
        keyword: src.token("extends", 0),
        superclass: src.type_name("A", 1, Some(a)),
    });
    class_b.members = vec![ClassMember::Method(MethodDeclaration {
        modifier_keyword: None,
        return_type: None,
        property_keyword: None,
        operator_keyword: None,
        name: src.ident("foo", 0, Some(foo)),
        type_parameters: Vec::new(),
        parameters: Some(FormalParameterList::default()),
        body: FunctionBody::Expression(src.new_unnamed(
            src.type_name("A", 2, Some(a)),
            0,
            1,
            Some(a_ctor),
        )),
    })];
    let tree = CompilationUnit::new(unit)
        .with_declaration(CompilationUnitMember::Class(class_a))
        .with_declaration(CompilationUnitMember::Class(class_b));

    let index = index(&model, &[&tree], IndexOptions::default());

    assert!(index.is_consistent());
    assert_eq!(index.element_count(), 2);
    let relations = flatten(&index);
    assert_eq!(
        relations,
        vec![
            (0, 0, RelationKind::IsExtendedBy, src.at("A", 1), 1),
            (0, 1, RelationKind::IsReferencedBy, src.at("A", 2) + 1, 0),
        ]
    );
    assert_eq!(index.find_element("package:app/main.dart", src.at("A", 0)), Some(0));
}

#[test]
fn shared_library_imported_by_two_units() {
    let one = Source::new("import 'shared.dart';");
    let two = Source::new("import 'shared.dart' show S;\nclass X {}");
    let mut model = ElementModel::new();
    let (shared_lib, shared_unit) = model.add_library("package:app/shared.dart");
    let s = model.add_child(shared_unit, ElementKind::Class, "S", 6);

    let (one_lib, one_unit) = model.add_library("package:app/one.dart");
    let one_import = model.add(
        Element::new(ElementKind::Import, "", 0)
            .with_enclosing(one_lib)
            .with_library(shared_lib),
    );
    let (two_lib, two_unit) = model.add_library("package:app/two.dart");
    let two_import = model.add(
        Element::new(ElementKind::Import, "", 0)
            .with_enclosing(two_lib)
            .with_library(shared_lib),
    );
    let x = model.add_child(two_unit, ElementKind::Class, "X", two.at("X", 0));

    let one_tree = CompilationUnit::new(one_unit).with_directive(import(
        &one,
        0,
        "'shared.dart'",
        shared_unit,
        one_import,
    ));
    let Directive::Import(mut two_directive) =
        import(&two, 0, "'shared.dart'", shared_unit, two_import)
    else {
        unreachable!()
    };
    two_directive.semicolon = two.token(";", 0);
    two_directive.combinators = vec![Combinator {
        keyword: two.token("show", 0),
        names: vec![two.ident("S", 0, Some(s))],
    }];
    let two_tree = CompilationUnit::new(two_unit)
        .with_directive(Directive::Import(two_directive))
        .with_declaration(CompilationUnitMember::Class(ClassDeclaration::new(
            two.token("class", 0),
            two.ident("X", 0, Some(x)),
        )));

    let index = index(&model, &[&one_tree, &two_tree], IndexOptions::default());

    assert!(index.is_consistent());
    assert_eq!(index.units.len(), 2);
    // Shared unit and shared library both sit at offset 0; the unit was
    // interned first.
    assert_eq!(index.element_count(), 3);
    let library_id = 1;
    let shared_uri = index.element_unit_uris[library_id as usize];
    assert_eq!(index.uri(shared_uri), Some("package:app/shared.dart"));
    assert_eq!(index.element_offsets, vec![0, 0, 6]);

    let to_library: Vec<_> = index.relations_of(library_id).collect();
    assert_eq!(to_library.len(), 2);
    assert_eq!(to_library[0].unit, 0);
    assert_eq!(to_library[1].unit, 1);
    assert!(to_library
        .iter()
        .all(|r| r.kind == RelationKind::IsReferencedBy && r.offset == 7 && r.length == 13));

    let shown: Vec<_> = index.relations_of(2).collect();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].unit, 1);
    assert_eq!(shown[0].offset, two.at("S", 0));
}

#[test]
fn synthetic_redirect_targets_real_constructor() {
    let src = Source::new("class B { B() : this.named(); B.named(); }");
    let mut model = ElementModel::new();
    let (_, unit) = model.add_library("package:app/b.dart");
    let b = model.add_child(unit, ElementKind::Class, "B", src.at("B", 0));
    let unnamed = model.add_child(b, ElementKind::Constructor, "", src.at("B", 1));
    let named = model.add_child(b, ElementKind::Constructor, "named", src.at("named", 1));
    let synthetic = model.add(
        Element::new(ElementKind::Constructor, "named", 0)
            .with_enclosing(b)
            .synthetic()
            .with_redirected_constructor(named),
    );

    let mut class = ClassDeclaration::new(src.token("class", 0), src.ident("B", 0, Some(b)));
    class.members = vec![
        ClassMember::Constructor(ConstructorDeclaration {
            factory_keyword: None,
            return_type: src.ident("B", 1, Some(b)),
            period: None,
            name: None,
            element: Some(unnamed),
            parameters: FormalParameterList::default(),
            initializers: vec![ConstructorInitializer::Redirecting(
                RedirectingConstructorInvocation {
                    this_keyword: src.token("this", 0),
                    period: Some(src.token(".", 0)),
                    constructor_name: Some(src.ident("named", 0, Some(synthetic))),
                    arguments: src.empty_args(1),
                    static_element: Some(synthetic),
                },
            )],
            redirected_constructor: None,
            body: FunctionBody::Empty,
        }),
        ClassMember::Constructor(ConstructorDeclaration {
            factory_keyword: None,
            return_type: src.ident("B", 2, Some(b)),
            period: Some(src.token(".", 1)),
            name: Some(src.ident("named", 1, Some(named))),
            element: Some(named),
            parameters: FormalParameterList::default(),
            initializers: Vec::new(),
            redirected_constructor: None,
            body: FunctionBody::Empty,
        }),
    ];
    let tree = CompilationUnit::new(unit).with_declaration(CompilationUnitMember::Class(class));

    let index = index(&model, &[&tree], IndexOptions::default());

    assert_eq!(index.element_count(), 1);
    assert_eq!(index.element_offsets, vec![src.at("named", 1)]);
    assert_eq!(
        flatten(&index),
        vec![(0, 0, RelationKind::IsReferencedBy, src.at(".", 0), 6)]
    );
}

#[test]
fn empty_package() {
    let model = ElementModel::new();
    let index = index(&model, &[], IndexOptions::default());

    assert!(index.element_library_uris.is_empty());
    assert!(index.element_unit_uris.is_empty());
    assert!(index.element_units.is_empty());
    assert!(index.element_offsets.is_empty());
    assert!(index.uris.is_empty());
    assert!(index.units.is_empty());
}

#[test]
fn locals_and_positional_parameters_never_appear() {
    let src = Source::new("f(p, {q}) { var v = p; v; q; }");
    let mut model = ElementModel::new();
    let (_, unit) = model.add_library("package:app/f.dart");
    let f = model.add_child(unit, ElementKind::Function, "f", src.at("f", 0));
    let required = ElementKind::Parameter(ParameterKind::Required);
    let p = model.add_child(f, required, "p", src.at("p", 0));
    let q = model.add_child(f, ElementKind::Parameter(ParameterKind::Named), "q", src.at("q", 0));
    let v = model.add_child(f, ElementKind::LocalVariable, "v", src.at("v", 0));

    let decl = FunctionDeclaration {
        return_type: None,
        property_keyword: None,
        name: src.ident("f", 0, Some(f)),
        type_parameters: Vec::new(),
        parameters: FormalParameterList::new(vec![
            FormalParameter::Simple(SimpleFormalParameter {
                type_name: None,
                identifier: src.ident("p", 0, Some(p)),
            }),
            FormalParameter::Default(Box::new(DefaultFormalParameter {
                parameter: FormalParameter::Simple(SimpleFormalParameter {
                    type_name: None,
                    identifier: src.ident("q", 0, Some(q)),
                }),
                separator: None,
                default_value: None,
            })),
        ]),
        body: FunctionBody::Block(Block {
            statements: vec![
                Statement::VariableDeclaration(VariableDeclarationList {
                    keyword: Some(src.token("var", 0)),
                    type_name: None,
                    variables: vec![VariableDeclaration {
                        name: src.ident("v", 0, Some(v)),
                        initializer: Some(Expression::Identifier(src.ident("p", 1, Some(p)))),
                    }],
                }),
                Statement::Expression(Expression::Identifier(src.ident("v", 1, Some(v)))),
                Statement::Expression(Expression::Identifier(src.ident("q", 1, Some(q)))),
            ],
        }),
    };
    let tree = CompilationUnit::new(unit).with_declaration(CompilationUnitMember::Function(decl));

    let index = index(&model, &[&tree], IndexOptions::default());

    assert_eq!(index.element_count(), 1);
    assert_eq!(index.element_offsets, vec![src.at("q", 0)]);
    assert_eq!(
        flatten(&index),
        vec![(0, 0, RelationKind::IsReferencedBy, src.at("q", 1), 1)]
    );
}

#[test]
fn unlinked_reference_is_dropped_and_walk_continues() {
    let src = Source::new("class C extends Orphan implements I {}");
    let mut model = ElementModel::new();
    let (_, unit) = model.add_library("package:app/c.dart");
    let orphan = model.add(Element::new(ElementKind::Class, "Orphan", 3));
    let i = model.add_child(unit, ElementKind::Class, "I", 40);
    let c = model.add_child(unit, ElementKind::Class, "C", src.at("C", 0));

    let mut class = ClassDeclaration::new(src.token("class", 0), src.ident("C", 0, Some(c)));
    class.extends_clause = Some(ExtendsClause {
        keyword: src.token("extends", 0),
        superclass: src.type_name("Orphan", 0, Some(orphan)),
    });
    class.implements_clause = Some(relindex::nodes::ImplementsClause {
        keyword: src.token("implements", 0),
        interfaces: vec![src.type_name("I", 0, Some(i))],
    });
    let tree = CompilationUnit::new(unit).with_declaration(CompilationUnitMember::Class(class));

    let index = index(&model, &[&tree], IndexOptions::default());

    assert_eq!(index.element_count(), 1);
    assert_eq!(
        flatten(&index),
        vec![(0, 0, RelationKind::IsImplementedBy, src.at("I", 0), 1)]
    );
}
