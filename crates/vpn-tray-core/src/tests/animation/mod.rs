mod keyframe;
