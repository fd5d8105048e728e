use super::*;

qc!(walk_v4, _walk_v4);
fn _walk_v4(list: Vec<Operation<TestPrefix, i32>>) -> bool {
    let Some((tree, model)) = apply(list) else {
        return false;
    };
    let mut walked = Vec::new();
    tree.walk(WalkFamily::V4, |p, t| {
        walked.push((p, *t));
        Ok::<_, Error>(true)
    })
    .unwrap();
    walked == sorted(&model)
}

qc!(walk_skip, _walk_skip);
fn _walk_skip((list, start): (Vec<Operation<TestPrefix, i32>>, TestPrefix)) -> bool {
    let Some((tree, model)) = apply(list) else {
        return false;
    };
    // skipping below `start` hides exactly the prefixes it strictly contains
    let mut walked = Vec::new();
    tree.walk(WalkFamily::Auto, |p, t| {
        walked.push((p, *t));
        Ok::<_, Error>(p != start.net())
    })
    .unwrap();
    let want: Model = model
        .iter()
        .filter(|(p, _)| !(start.contains(p) && **p != start) || !model.contains_key(&start))
        .map(|(p, t)| (*p, *t))
        .collect();
    walked == sorted(&want)
}

qc!(values, _values);
fn _values(list: Vec<Operation<TestPrefix, i32>>) -> bool {
    let Some((tree, model)) = apply(list) else {
        return false;
    };
    let want = sorted(&model);
    tree.values().copied().eq(want.iter().map(|(_, t)| *t))
        && tree.keys().eq(want.iter().map(|(p, _)| *p))
        && (&tree).into_iter().count() == model.len()
}
