use crate::Node;
use crate::NodeContext;
use crate::NodeKind;
use crate::Report;
use crate::VisitContext;
use crate::Visitor;
use crate::WalkError;
use libgraphql_schema_ast::Document;
use libgraphql_schema_ast::DocumentError;
use libgraphql_schema_ast::FieldDefinitionId;
use libgraphql_schema_ast::InputValueDefinitionId;
use libgraphql_schema_ast::TypeDefinitionId;
use libgraphql_schema_ast::TypeRefId;
use smallvec::SmallVec;

type Result<T> = std::result::Result<T, WalkError>;

/// Deepest path a walk may descend to before it aborts with
/// [`WalkError::MaxDepthExceeded`].
pub const DEFAULT_MAX_DEPTH: usize = 48;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WalkerConfig {
    /// The document root sits at depth 1; every nested definition and every
    /// type-reference wrapper adds one.
    pub max_depth: usize,
}
impl WalkerConfig {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}
impl std::default::Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Handle to a visitor lent to a [`Walker`] via [`Walker::add_visitor()`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct VisitorId(usize);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WalkOutcome {
    Failed,
    Succeeded,
}
impl WalkOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Progress of a [`Walker`]'s most recent walk.
///
/// `NotStarted` only ever precedes the first walk; every later walk begins
/// at `DocumentEntered`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WalkState {
    NotStarted,
    DocumentEntered,
    TraversingTypes,
    Completed(WalkOutcome),
}

/// Walks a [`Document`] depth-first and dispatches each node to the
/// visitors registered for its [`NodeKind`].
///
/// Nodes are entered in this order:
///
/// 1. the document root,
/// 2. the schema definition, if any,
/// 3. each type definition in declaration order. Object and interface types
///    are followed by their fields (each field's type reference is walked
///    before its arguments), enums by their values and input objects by
///    their fields. Unions and scalars have no children.
///
/// Visitors registered for the same kind are invoked in registration order.
/// Registration closes as soon as the first walk starts.
pub struct Walker<'v, C = ()> {
    ancestors: SmallVec<[Node; 8]>,
    config: WalkerConfig,
    enter_visitors: [Vec<VisitorId>; NodeKind::COUNT],
    state: WalkState,
    visitors: Vec<&'v mut (dyn Visitor<C> + 'v)>,
}
impl<'v, C> Walker<'v, C> {
    pub fn new() -> Self {
        Self::with_config(WalkerConfig::default())
    }

    pub fn with_config(config: WalkerConfig) -> Self {
        Self {
            ancestors: SmallVec::new(),
            config,
            enter_visitors: std::array::from_fn(|_| vec![]),
            state: WalkState::NotStarted,
            visitors: vec![],
        }
    }

    /// Lends `visitor` to this walker for as long as the walker lives. The
    /// visitor receives no callbacks until it is registered for at least one
    /// [`NodeKind`].
    pub fn add_visitor<V: Visitor<C> + 'v>(&mut self, visitor: &'v mut V) -> Result<VisitorId> {
        self.check_registration_open()?;
        self.visitors.push(visitor);
        Ok(VisitorId(self.visitors.len() - 1))
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Registers `visitor_id` to be called when a node of `kind` is entered.
    pub fn register_enter(&mut self, kind: NodeKind, visitor_id: VisitorId) -> Result<()> {
        self.check_registration_open()?;
        if visitor_id.0 >= self.visitors.len() {
            return Err(WalkError::UnknownVisitor(visitor_id.0));
        }
        self.enter_visitors[kind.index()].push(visitor_id);
        Ok(())
    }

    pub fn register_enter_document_visitor(&mut self, visitor_id: VisitorId) -> Result<()> {
        self.register_enter(NodeKind::Document, visitor_id)
    }

    pub fn register_enter_schema_definition_visitor(&mut self, visitor_id: VisitorId) -> Result<()> {
        self.register_enter(NodeKind::SchemaDefinition, visitor_id)
    }

    pub fn register_enter_object_type_definition_visitor(
        &mut self,
        visitor_id: VisitorId,
    ) -> Result<()> {
        self.register_enter(NodeKind::ObjectTypeDefinition, visitor_id)
    }

    pub fn register_enter_interface_type_definition_visitor(
        &mut self,
        visitor_id: VisitorId,
    ) -> Result<()> {
        self.register_enter(NodeKind::InterfaceTypeDefinition, visitor_id)
    }

    pub fn register_enter_field_definition_visitor(&mut self, visitor_id: VisitorId) -> Result<()> {
        self.register_enter(NodeKind::FieldDefinition, visitor_id)
    }

    pub fn register_enter_input_value_definition_visitor(
        &mut self,
        visitor_id: VisitorId,
    ) -> Result<()> {
        self.register_enter(NodeKind::InputValueDefinition, visitor_id)
    }

    pub fn register_enter_enum_type_definition_visitor(
        &mut self,
        visitor_id: VisitorId,
    ) -> Result<()> {
        self.register_enter(NodeKind::EnumTypeDefinition, visitor_id)
    }

    pub fn register_enter_enum_value_definition_visitor(
        &mut self,
        visitor_id: VisitorId,
    ) -> Result<()> {
        self.register_enter(NodeKind::EnumValueDefinition, visitor_id)
    }

    pub fn register_enter_input_object_type_definition_visitor(
        &mut self,
        visitor_id: VisitorId,
    ) -> Result<()> {
        self.register_enter(NodeKind::InputObjectTypeDefinition, visitor_id)
    }

    pub fn register_enter_union_type_definition_visitor(
        &mut self,
        visitor_id: VisitorId,
    ) -> Result<()> {
        self.register_enter(NodeKind::UnionTypeDefinition, visitor_id)
    }

    pub fn register_enter_scalar_type_definition_visitor(
        &mut self,
        visitor_id: VisitorId,
    ) -> Result<()> {
        self.register_enter(NodeKind::ScalarTypeDefinition, visitor_id)
    }

    /// Shorthand for [`add_visitor()`](Self::add_visitor) followed by a
    /// [`register_enter()`](Self::register_enter) per kind.
    pub fn register_visitor<V: Visitor<C> + 'v>(
        &mut self,
        visitor: &'v mut V,
        kinds: &[NodeKind],
    ) -> Result<VisitorId> {
        let visitor_id = self.add_visitor(visitor)?;
        for kind in kinds {
            self.register_enter(*kind, visitor_id)?;
        }
        Ok(visitor_id)
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    /// Walks `document` once, invoking registered visitors with
    /// `user_context`.
    ///
    /// The first error (from the document or from a visitor) aborts the
    /// walk. It is recorded in `report` together with the path being walked
    /// at the time, and the walk ends in
    /// [`WalkState::Completed(WalkOutcome::Failed)`](WalkState::Completed).
    pub fn walk(
        &mut self,
        document: &Document,
        user_context: &mut C,
        report: &mut Report,
    ) -> WalkOutcome {
        self.ancestors.clear();
        log::debug!(
            "Walking document with {} type definition(s).",
            document.type_definitions().len(),
        );

        let outcome = match self.walk_document(document, user_context) {
            Ok(()) => WalkOutcome::Succeeded,
            Err(err) => {
                log::debug!("Walk aborted: {err}");
                let node = NodeContext::from_ancestors(document, &self.ancestors);
                report.add_walk_error(err, node);
                WalkOutcome::Failed
            },
        };

        self.ancestors.clear();
        self.state = WalkState::Completed(outcome);
        outcome
    }

    fn check_registration_open(&self) -> Result<()> {
        if self.state != WalkState::NotStarted {
            return Err(WalkError::LateRegistration);
        }
        Ok(())
    }

    fn dispatch(&mut self, document: &Document, user_context: &mut C, node: Node) -> Result<()> {
        let Some(kind) = node.kind() else {
            return Ok(());
        };

        let Self {
            ancestors,
            enter_visitors,
            visitors,
            ..
        } = self;
        for visitor_id in &enter_visitors[kind.index()] {
            log::trace!("Entering {node:?} with visitor #{}.", visitor_id.0);
            let visitor = &mut *visitors[visitor_id.0];
            let mut cx = VisitContext {
                ancestors: ancestors.as_slice(),
                document,
                user_context: &mut *user_context,
            };
            match node {
                Node::Document =>
                    visitor.enter_document(&mut cx)?,
                Node::SchemaDefinition =>
                    visitor.enter_schema_definition(&mut cx)?,
                Node::ObjectTypeDefinition(id) =>
                    visitor.enter_object_type_definition(&mut cx, id)?,
                Node::InterfaceTypeDefinition(id) =>
                    visitor.enter_interface_type_definition(&mut cx, id)?,
                Node::FieldDefinition(id) =>
                    visitor.enter_field_definition(&mut cx, id)?,
                Node::InputValueDefinition(id) =>
                    visitor.enter_input_value_definition(&mut cx, id)?,
                Node::EnumTypeDefinition(id) =>
                    visitor.enter_enum_type_definition(&mut cx, id)?,
                Node::EnumValueDefinition(id) =>
                    visitor.enter_enum_value_definition(&mut cx, id)?,
                Node::InputObjectTypeDefinition(id) =>
                    visitor.enter_input_object_type_definition(&mut cx, id)?,
                Node::UnionTypeDefinition(id) =>
                    visitor.enter_union_type_definition(&mut cx, id)?,
                Node::ScalarTypeDefinition(id) =>
                    visitor.enter_scalar_type_definition(&mut cx, id)?,
                Node::TypeRef(_) => (),
            }
        }
        Ok(())
    }

    /// Pushes `node` onto the walk path and invokes its visitors. The caller
    /// pops it with [`leave()`](Self::leave) once its children are walked.
    fn enter(&mut self, document: &Document, user_context: &mut C, node: Node) -> Result<()> {
        self.push(node)?;
        self.dispatch(document, user_context, node)
    }

    fn leave(&mut self) {
        self.ancestors.pop();
    }

    fn push(&mut self, node: Node) -> Result<()> {
        if self.ancestors.len() >= self.config.max_depth {
            return Err(WalkError::MaxDepthExceeded {
                max_depth: self.config.max_depth,
            });
        }
        self.ancestors.push(node);
        Ok(())
    }

    fn walk_document(&mut self, document: &Document, user_context: &mut C) -> Result<()> {
        // The root is always entered, even with a max depth of 0, so every
        // walk passes through `DocumentEntered`.
        self.ancestors.push(Node::Document);
        self.state = WalkState::DocumentEntered;
        self.dispatch(document, user_context, Node::Document)?;

        self.state = WalkState::TraversingTypes;
        if document.schema_definition().is_some() {
            self.enter(document, user_context, Node::SchemaDefinition)?;
            self.leave();
        }

        for type_def in document.type_definitions() {
            match *type_def {
                TypeDefinitionId::Enum(id) => {
                    self.enter(document, user_context, Node::EnumTypeDefinition(id))?;
                    for value_id in document.enum_type_definition(id)?.values() {
                        self.enter(document, user_context, Node::EnumValueDefinition(*value_id))?;
                        self.leave();
                    }
                },

                TypeDefinitionId::InputObject(id) => {
                    self.enter(document, user_context, Node::InputObjectTypeDefinition(id))?;
                    for input_value_id in document.input_object_type_definition(id)?.fields() {
                        self.walk_input_value_definition(document, user_context, *input_value_id)?;
                    }
                },

                TypeDefinitionId::Interface(id) => {
                    self.enter(document, user_context, Node::InterfaceTypeDefinition(id))?;
                    for field_id in document.interface_type_definition(id)?.fields() {
                        self.walk_field_definition(document, user_context, *field_id)?;
                    }
                },

                TypeDefinitionId::Object(id) => {
                    self.enter(document, user_context, Node::ObjectTypeDefinition(id))?;
                    for field_id in document.object_type_definition(id)?.fields() {
                        self.walk_field_definition(document, user_context, *field_id)?;
                    }
                },

                TypeDefinitionId::Scalar(id) =>
                    self.enter(document, user_context, Node::ScalarTypeDefinition(id))?,

                TypeDefinitionId::Union(id) =>
                    self.enter(document, user_context, Node::UnionTypeDefinition(id))?,
            }
            self.leave();
        }

        self.leave();
        Ok(())
    }

    fn walk_field_definition(
        &mut self,
        document: &Document,
        user_context: &mut C,
        field_id: FieldDefinitionId,
    ) -> Result<()> {
        self.enter(document, user_context, Node::FieldDefinition(field_id))?;
        let field_def = document.field_definition(field_id)?;
        self.walk_type_ref(document, field_def.type_ref())?;
        for argument_id in field_def.arguments() {
            self.walk_input_value_definition(document, user_context, *argument_id)?;
        }
        self.leave();
        Ok(())
    }

    fn walk_input_value_definition(
        &mut self,
        document: &Document,
        user_context: &mut C,
        input_value_id: InputValueDefinitionId,
    ) -> Result<()> {
        self.enter(document, user_context, Node::InputValueDefinition(input_value_id))?;
        let type_ref = document.input_value_definition_type(input_value_id)?;
        self.walk_type_ref(document, type_ref)?;
        self.leave();
        Ok(())
    }

    /// Descends through every wrapper of `type_ref` down to its named type.
    fn walk_type_ref(&mut self, document: &Document, type_ref: TypeRefId) -> Result<()> {
        // Resolving up front rejects dangling and looping chains, so the
        // loop below always reaches a named type.
        document.named_type_ref(type_ref).map_err(|_| {
            DocumentError::UnresolvedTypeReference {
                type_ref: type_ref.index(),
            }
        })?;

        let mut current = type_ref;
        let mut pushed = 0;
        loop {
            self.push(Node::TypeRef(current))?;
            pushed += 1;
            match document.type_ref(current)?.inner() {
                Some(inner) => current = inner,
                None => break,
            }
        }
        self.ancestors.truncate(self.ancestors.len() - pushed);
        Ok(())
    }
}
impl<'v, C> std::default::Default for Walker<'v, C> {
    fn default() -> Self {
        Self::new()
    }
}
impl<'v, C> std::fmt::Debug for Walker<'v, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walker")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("visitors", &self.visitors.len())
            .finish()
    }
}

/// Walks `document` with a single visitor registered for `kinds`.
///
/// Registration failures are recorded in `report` like any other walk
/// failure.
pub fn walk_with_visitor<V: Visitor>(
    document: &Document,
    visitor: &mut V,
    kinds: &[NodeKind],
    config: WalkerConfig,
    report: &mut Report,
) -> WalkOutcome {
    let mut walker: Walker<'_, ()> = Walker::with_config(config);
    if let Err(err) = walker.register_visitor(visitor, kinds) {
        report.add_walk_error(err, None);
        return WalkOutcome::Failed;
    }
    walker.walk(document, &mut (), report)
}
